use std::fmt;

/// Value of either one of two types.
///
/// This is the by-value view of a set [`OptionalPair`], see [`OptionalPair::into_either`] and
/// [`OptionalPair::as_either`].
///
/// [`OptionalPair`]: crate::OptionalPair
/// [`OptionalPair::into_either`]: crate::OptionalPair::into_either
/// [`OptionalPair::as_either`]: crate::OptionalPair::as_either
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// Left variant.
    Left(L),
    /// Right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if the value is [`Either::Left`].
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the value is [`Either::Right`].
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Converts from `&mut Either<L, R>` to `Either<&mut L, &mut R>`.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Maps the left value with `f`.
    #[inline]
    pub fn map_left<T, F: FnOnce(L) -> T>(self, f: F) -> Either<T, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Maps the right value with `f`.
    #[inline]
    pub fn map_right<T, F: FnOnce(R) -> T>(self, f: F) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Collapse into a single value, with `f` for left and `g` for right.
    ///
    /// ```
    /// use optpair::Either;
    ///
    /// let value = Either::<i32, &str>::Right("foo");
    /// assert_eq!(value.either(|l| l as usize, str::len), 3);
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, f: F, g: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => g(r),
        }
    }
}

// ===== Either traits =====

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => l.fmt(f),
            Self::Right(r) => r.fmt(f),
        }
    }
}

#[test]
fn test_either_projection() {
    let mut value = Either::<i32, String>::Left(4);
    assert!(value.is_left());
    assert!(!value.is_right());

    if let Either::Left(l) = value.as_mut() {
        *l += 1;
    }
    assert_eq!(value.as_ref().left(), Some(&5));
    assert_eq!(value.clone().right(), None);

    let value = value.map_left(|l| l * 2).map_right(|r| r.len());
    assert_eq!(value, Either::Left(10));
}

#[test]
fn test_either_display() {
    let left = Either::<&str, String>::Left("foo");
    let right = Either::<&str, String>::Right(String::from("bar"));
    assert_eq!(left.to_string(), "foo");
    assert_eq!(right.to_string(), "bar");
    assert_eq!(format!("[{:>5}]", right.as_ref()), "[  bar]");
}
