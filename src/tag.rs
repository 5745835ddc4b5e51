use std::fmt;

const IS_SET: u8 = 0b0000_0001;
const IS_A: u8 = 0b0010_0000;
const IS_B: u8 = 0b0100_0000;

/// Discriminant of a container, as a single byte.
///
/// The low bit marks a live value, the alternative bits mark which side of an
/// [`OptionalPair`] is live. The alternative bits are mutually exclusive, so a container which
/// holds "both" alternatives is not representable.
///
/// | state          | byte          |
/// |----------------|---------------|
/// | [`Tag::Unset`] | `0b0000_0000` |
/// | [`Tag::Set`]   | `0b0000_0001` |
/// | [`Tag::A`]     | `0b0010_0001` |
/// | [`Tag::B`]     | `0b0100_0001` |
///
/// [`OptionalPair`]: crate::OptionalPair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// No live value.
    Unset = 0,
    /// [`Optional`][crate::Optional] holds a value.
    Set = IS_SET,
    /// [`OptionalPair`][crate::OptionalPair] holds its first alternative.
    A = IS_SET | IS_A,
    /// [`OptionalPair`][crate::OptionalPair] holds its second alternative.
    B = IS_SET | IS_B,
}

impl Tag {
    /// Returns the byte encoding.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Decode a byte, returns [`None`] for any byte that is not a valid encoding.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Tag> {
        match byte {
            0 => Some(Tag::Unset),
            IS_SET => Some(Tag::Set),
            0b0010_0001 => Some(Tag::A),
            0b0100_0001 => Some(Tag::B),
            _ => None,
        }
    }

    /// Returns `true` if the tag marks a live value.
    #[inline]
    pub const fn is_set(self) -> bool {
        self.as_byte() & IS_SET == IS_SET
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Tag::Unset => "unset",
            Tag::Set => "set",
            Tag::A => "alternative A",
            Tag::B => "alternative B",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(value: Tag) -> Self {
        value.as_byte()
    }
}

#[test]
fn test_tag_encoding() {
    assert_eq!(Tag::Unset.as_byte(), 0);
    assert_eq!(Tag::Set.as_byte(), 1);
    assert_eq!(Tag::A.as_byte(), 33);
    assert_eq!(Tag::B.as_byte(), 65);

    assert!(!Tag::Unset.is_set());
    assert!(Tag::Set.is_set());
    assert!(Tag::A.is_set());
    assert!(Tag::B.is_set());
}

#[test]
fn test_tag_from_byte() {
    for tag in [Tag::Unset, Tag::Set, Tag::A, Tag::B] {
        assert_eq!(Tag::from_byte(tag.as_byte()), Some(tag));
    }

    // both alternative bits
    assert_eq!(Tag::from_byte(0b0110_0001), None);
    // alternative bit without the set bit
    assert_eq!(Tag::from_byte(0b0010_0000), None);
    assert_eq!(Tag::from_byte(0xff), None);
}
