use super::{OptionalPair, Slot};
use crate::Tag;

/// Names one alternative of an [`OptionalPair<A, B>`] at compile time.
///
/// Implemented only by [`First`] and [`Second`]. Generic operations such as
/// [`OptionalPair::get`] and [`OptionalPair::default_initialize`] take the selector as a type
/// parameter, so selecting a type that is not one of the alternatives does not compile.
///
/// ```compile_fail
/// use optpair::OptionalPair;
///
/// let mut pair = OptionalPair::<i32, bool>::new();
/// pair.default_initialize::<String>();
/// ```
pub trait Select<A, B>: sealed::Sealed {
    /// The selected alternative type.
    type Output;

    /// Discriminant of a pair holding the selected alternative.
    const TAG: Tag;

    #[doc(hidden)]
    fn project(pair: &OptionalPair<A, B>) -> Option<&Self::Output>;

    #[doc(hidden)]
    fn project_mut(pair: &mut OptionalPair<A, B>) -> Option<&mut Self::Output>;

    /// Drop the live value, if any, then place `value` as the selected alternative.
    #[doc(hidden)]
    fn place(pair: &mut OptionalPair<A, B>, value: Self::Output);
}

/// Selects alternative A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct First;

/// Selects alternative B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Second;

impl<A, B> Select<A, B> for First {
    type Output = A;

    const TAG: Tag = Tag::A;

    #[inline]
    fn project(pair: &OptionalPair<A, B>) -> Option<&A> {
        pair.as_a()
    }

    #[inline]
    fn project_mut(pair: &mut OptionalPair<A, B>) -> Option<&mut A> {
        pair.as_a_mut()
    }

    #[inline]
    fn place(pair: &mut OptionalPair<A, B>, value: A) {
        pair.clear();
        pair.slot = Slot::A(value);
    }
}

impl<A, B> Select<A, B> for Second {
    type Output = B;

    const TAG: Tag = Tag::B;

    #[inline]
    fn project(pair: &OptionalPair<A, B>) -> Option<&B> {
        pair.as_b()
    }

    #[inline]
    fn project_mut(pair: &mut OptionalPair<A, B>) -> Option<&mut B> {
        pair.as_b_mut()
    }

    #[inline]
    fn place(pair: &mut OptionalPair<A, B>, value: B) {
        pair.clear();
        pair.slot = Slot::B(value);
    }
}

mod sealed {
    pub trait Sealed { }

    impl Sealed for super::First { }
    impl Sealed for super::Second { }
}
