use crate::Tag;

/// An error returned when accessing a value which is not live in a container.
///
/// Returned by the `try_*` accessors of [`Optional`] and [`OptionalPair`]. The panicking
/// accessors treat the same condition as a contract violation.
///
/// [`Optional`]: crate::Optional
/// [`OptionalPair`]: crate::OptionalPair
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The container holds no value.
    Unset,
    /// The container holds the other alternative.
    WrongAlternative {
        /// Alternative that was requested.
        expected: Tag,
        /// Alternative that is live.
        found: Tag,
    },
}

impl AccessError {
    /// Build the error for a request of `expected` on a container currently tagged `found`.
    #[inline]
    pub(crate) const fn mismatch(expected: Tag, found: Tag) -> Self {
        match found {
            Tag::Unset => Self::Unset,
            _ => Self::WrongAlternative { expected, found },
        }
    }

    /// Returns the tag of the container at the time of access.
    #[inline]
    pub const fn found(&self) -> Tag {
        match self {
            Self::Unset => Tag::Unset,
            Self::WrongAlternative { found, .. } => *found,
        }
    }
}

impl std::error::Error for AccessError { }

impl std::fmt::Debug for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::WrongAlternative { expected, found } => f
                .debug_struct("WrongAlternative")
                .field("expected", expected)
                .field("found", found)
                .finish(),
        }
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("container holds no value"),
            Self::WrongAlternative { expected, found } => {
                write!(f, "requested {expected}, but container holds {found}")
            }
        }
    }
}

#[test]
fn test_access_error_display() {
    let err = AccessError::mismatch(Tag::A, Tag::Unset);
    assert_eq!(err, AccessError::Unset);
    assert_eq!(err.to_string(), "container holds no value");

    let err = AccessError::mismatch(Tag::A, Tag::B);
    assert_eq!(err.found(), Tag::B);
    assert_eq!(
        err.to_string(),
        "requested alternative A, but container holds alternative B"
    );
}
