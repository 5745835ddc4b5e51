use std::{fmt, hint, mem};

use crate::{
    AccessError, Tag,
    macros::{contract, trace},
};

/// A container which holds zero or one value of `T`.
///
/// A live `T` exists if and only if [`is_set`][Optional::is_set] returns `true`, and the
/// container exclusively owns it. Dropping the container drops the value, if any.
///
/// Accessors such as [`get_value`][Optional::get_value] treat an unset container as a contract
/// violation and panic. Use the `try_*` variants to get an [`AccessError`] instead.
///
/// # Examples
///
/// ```
/// use optpair::Optional;
///
/// let mut opt = Optional::new();
/// assert!(!opt.is_set());
///
/// opt.set_value(5);
/// opt.set_value(15);
/// assert_eq!(*opt.get_value(), 15);
///
/// let moved = opt.take();
/// assert!(!opt.is_set());
/// assert_eq!(*moved.get_value(), 15);
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct Optional<T> {
    slot: Slot<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Slot<T> {
    Unset,
    Set(T),
}

impl<T> Optional<T> {
    /// Create new unset [`Optional`].
    #[inline]
    pub const fn new() -> Self {
        Self { slot: Slot::Unset }
    }

    /// Create new [`Optional`] holding `value`.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self { slot: Slot::Set(value) }
    }

    // ===== State =====

    /// Returns `true` if the container holds a value.
    #[inline]
    pub const fn is_set(&self) -> bool {
        matches!(self.slot, Slot::Set(_))
    }

    /// Returns the discriminant, either [`Tag::Unset`] or [`Tag::Set`].
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self.slot {
            Slot::Unset => Tag::Unset,
            Slot::Set(_) => Tag::Set,
        }
    }

    // ===== Getter =====

    /// Returns shared reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the container is unset.
    #[inline]
    #[track_caller]
    pub fn get_value(&self) -> &T {
        match &self.slot {
            Slot::Set(value) => value,
            Slot::Unset => crate::macros::violation!("`get_value` called on unset `Optional`"),
        }
    }

    /// Returns mutable reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the container is unset.
    #[inline]
    #[track_caller]
    pub fn get_value_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Set(value) => value,
            Slot::Unset => crate::macros::violation!("`get_value_mut` called on unset `Optional`"),
        }
    }

    /// Returns shared reference to the value, or [`AccessError::Unset`].
    #[inline]
    pub fn try_get_value(&self) -> Result<&T, AccessError> {
        match &self.slot {
            Slot::Set(value) => Ok(value),
            Slot::Unset => Err(AccessError::Unset),
        }
    }

    /// Returns mutable reference to the value, or [`AccessError::Unset`].
    #[inline]
    pub fn try_get_value_mut(&mut self) -> Result<&mut T, AccessError> {
        match &mut self.slot {
            Slot::Set(value) => Ok(value),
            Slot::Unset => Err(AccessError::Unset),
        }
    }

    /// Returns shared reference to the value without checking that it is set.
    ///
    /// # Safety
    ///
    /// The container must be set. Debug builds still assert it.
    #[inline]
    pub unsafe fn get_value_unchecked(&self) -> &T {
        debug_assert!(self.is_set(), "`get_value_unchecked` called on unset `Optional`");
        match &self.slot {
            Slot::Set(value) => value,
            // SAFETY: caller guarantees the container is set
            Slot::Unset => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Returns mutable reference to the value without checking that it is set.
    ///
    /// # Safety
    ///
    /// The container must be set. Debug builds still assert it.
    #[inline]
    pub unsafe fn get_value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_set(), "`get_value_unchecked_mut` called on unset `Optional`");
        match &mut self.slot {
            Slot::Set(value) => value,
            // SAFETY: caller guarantees the container is set
            Slot::Unset => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Converts to `Option<&T>`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match &self.slot {
            Slot::Set(value) => Some(value),
            Slot::Unset => None,
        }
    }

    /// Converts to `Option<&mut T>`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Set(value) => Some(value),
            Slot::Unset => None,
        }
    }

    /// Consumes the container, returns the value if any.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self.slot {
            Slot::Set(value) => Some(value),
            Slot::Unset => None,
        }
    }

    // ===== Mutation =====

    /// Set the value.
    ///
    /// If unset, `value` is moved in. If set, `value` is assigned over the current value, which
    /// drops the previous one.
    #[inline]
    pub fn set_value(&mut self, value: T) -> &mut T {
        match &mut self.slot {
            Slot::Set(current) => *current = value,
            slot => *slot = Slot::Set(value),
        }
        self.set_mut()
    }

    /// Set the value by copying from `value`.
    ///
    /// If already set, the current value is reused through [`Clone::clone_from`].
    #[inline]
    pub fn assign(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        match &mut self.slot {
            Slot::Set(current) => current.clone_from(value),
            slot => *slot = Slot::Set(value.clone()),
        }
        self.set_mut()
    }

    /// Replace the content with `value`.
    ///
    /// Unlike [`set_value`][Optional::set_value], the current value, if any, is dropped before
    /// `value` is placed.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Replace the content with the result of `f`.
    ///
    /// The current value, if any, is dropped before `f` is called.
    #[inline]
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.clear();
        self.slot = Slot::Set(f());
        self.set_mut()
    }

    /// Set the value to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if the container is already set.
    #[inline]
    #[track_caller]
    pub fn default_initialize(&mut self) -> &mut T
    where
        T: Default,
    {
        contract!(!self.is_set(), "`default_initialize` called on set `Optional`");
        self.slot = Slot::Set(T::default());
        self.set_mut()
    }

    /// Drop the value, if any, leaving the container unset.
    #[inline]
    pub fn clear(&mut self) {
        if self.is_set() {
            trace!("clearing set `Optional`");
            self.slot = Slot::Unset;
        }
    }

    /// Moves the content out into a new container, leaving `self` unset.
    #[inline]
    pub fn take(&mut self) -> Optional<T> {
        if self.is_set() {
            trace!("taking value out of `Optional`");
        }
        Optional { slot: mem::replace(&mut self.slot, Slot::Unset) }
    }

    #[inline]
    fn set_mut(&mut self) -> &mut T {
        // SAFETY: only called right after the slot is set
        unsafe { self.get_value_unchecked_mut() }
    }
}

// ===== Std traits =====

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Optional<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: self.slot.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        match (&mut self.slot, &source.slot) {
            (Slot::Set(to), Slot::Set(from)) => to.clone_from(from),
            (slot, from) => {
                *slot = Slot::Unset;
                *slot = from.clone();
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Optional").field(&self.slot).finish()
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
