/// Fail fast when a container precondition does not hold.
///
/// ```ignore
/// contract!(self.is_set(), "`get_value` called on unset `Optional`");
/// ```
///
/// With the `log` feature enabled, the violation is also reported as an error record before
/// panicking.
macro_rules! contract {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            crate::macros::violation!($msg);
        }
    };
}

macro_rules! violation {
    ($msg:literal) => {{
        #[cfg(feature = "log")]
        log::error!(concat!("contract violation: ", $msg));
        panic!($msg)
    }};
}

/// Trace record of container state transitions, compiled out without the `log` feature.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($tt)*);
    };
}

pub(crate) use {contract, violation, trace};
