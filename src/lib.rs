//! Optional value containers.
//!
//! - [`Optional<T>`] holds zero or one `T`.
//! - [`OptionalPair<A, B>`] holds nothing, an `A`, or a `B`.
//!
//! Both report their state as a one byte [`Tag`], never hold more than one live value, and treat
//! access to a value which is not live as a contract violation. Enable the `log` feature to have
//! violations and state transitions reported through [`log`](https://docs.rs/log).
#![warn(missing_docs, missing_debug_implementations)]

mod macros;

mod either;
mod error;
mod optional;
mod tag;

pub mod pair;

pub use either::Either;
pub use error::AccessError;
pub use optional::Optional;
pub use pair::{First, OptionalPair, Second, Select};
pub use tag::Tag;
