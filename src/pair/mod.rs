//! A container which holds zero or one value of one of two alternative types.
//!
//! See [`OptionalPair`] for the container, and [`Select`] for naming an alternative in generic
//! operations.
use std::{any::TypeId, fmt, hint, mem};

use crate::{
    AccessError, Either, Tag,
    macros::{contract, trace, violation},
};

mod select;

#[cfg(test)]
mod test;

pub use select::{First, Second, Select};

/// A container which holds nothing, an `A`, or a `B`.
///
/// At most one alternative is live at a time and the [`tag`][OptionalPair::tag] identifies
/// which. Replacing the content always drops the previous occupant exactly once, and accessing
/// an alternative which is not live is a contract violation that panics. Use the `try_*`
/// variants to get an [`AccessError`] instead.
///
/// # Examples
///
/// ```
/// use optpair::OptionalPair;
///
/// let mut pair = OptionalPair::<i32, bool>::new();
/// assert!(!pair.is_set());
///
/// pair.set_value_a(25325);
/// assert!(pair.is_type_a());
/// assert_eq!(*pair.get_value_a(), 25325);
///
/// pair.set_value_b(false);
/// assert!(pair.is_type_b());
/// assert!(!pair.is_type_a());
/// assert_eq!(*pair.get_value_b(), false);
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct OptionalPair<A, B> {
    slot: Slot<A, B>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Slot<A, B> {
    None,
    A(A),
    B(B),
}

impl<A, B> OptionalPair<A, B> {
    /// Create new empty [`OptionalPair`].
    #[inline]
    pub const fn new() -> Self {
        Self { slot: Slot::None }
    }

    /// Create new [`OptionalPair`] holding alternative A.
    #[inline]
    pub const fn from_a(value: A) -> Self {
        Self { slot: Slot::A(value) }
    }

    /// Create new [`OptionalPair`] holding alternative B.
    #[inline]
    pub const fn from_b(value: B) -> Self {
        Self { slot: Slot::B(value) }
    }

    // ===== State =====

    /// Returns `true` if either alternative is live.
    #[inline]
    pub const fn is_set(&self) -> bool {
        !matches!(self.slot, Slot::None)
    }

    /// Returns `true` if alternative A is live.
    #[inline]
    pub const fn is_type_a(&self) -> bool {
        matches!(self.slot, Slot::A(_))
    }

    /// Returns `true` if alternative B is live.
    #[inline]
    pub const fn is_type_b(&self) -> bool {
        matches!(self.slot, Slot::B(_))
    }

    /// Returns `true` if the alternative selected by `S` is live.
    ///
    /// ```
    /// use optpair::{First, OptionalPair, Second};
    ///
    /// let pair = OptionalPair::<i32, &str>::from_b("foo");
    /// assert!(pair.is::<Second>());
    /// assert!(!pair.is::<First>());
    /// ```
    #[inline]
    pub fn is<S: Select<A, B>>(&self) -> bool {
        self.tag() == S::TAG
    }

    /// Returns `true` if the live value is of type `X`.
    ///
    /// Returns `false` when empty, or when `X` is neither `A` nor `B`. When `A` and `B` are the
    /// same type, any live value matches, so this is equal to [`is_set`][OptionalPair::is_set].
    ///
    /// ```
    /// use optpair::OptionalPair;
    ///
    /// let pair = OptionalPair::<i32, bool>::from_a(7);
    /// assert!(pair.contains_type::<i32>());
    /// assert!(!pair.contains_type::<bool>());
    /// assert!(!pair.contains_type::<String>());
    /// ```
    #[inline]
    pub fn contains_type<X: 'static>(&self) -> bool
    where
        A: 'static,
        B: 'static,
    {
        match self.slot {
            Slot::None => false,
            Slot::A(_) => TypeId::of::<X>() == TypeId::of::<A>(),
            Slot::B(_) => TypeId::of::<X>() == TypeId::of::<B>(),
        }
    }

    /// Returns the discriminant, one of [`Tag::Unset`], [`Tag::A`] or [`Tag::B`].
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self.slot {
            Slot::None => Tag::Unset,
            Slot::A(_) => Tag::A,
            Slot::B(_) => Tag::B,
        }
    }

    // ===== Getter =====

    /// Returns shared reference to alternative A.
    ///
    /// # Panics
    ///
    /// Panics if alternative A is not live.
    #[inline]
    #[track_caller]
    pub fn get_value_a(&self) -> &A {
        match &self.slot {
            Slot::A(a) => a,
            _ => violation!("`get_value_a` called on `OptionalPair` not holding alternative A"),
        }
    }

    /// Returns mutable reference to alternative A.
    ///
    /// # Panics
    ///
    /// Panics if alternative A is not live.
    #[inline]
    #[track_caller]
    pub fn get_value_a_mut(&mut self) -> &mut A {
        match &mut self.slot {
            Slot::A(a) => a,
            _ => violation!("`get_value_a_mut` called on `OptionalPair` not holding alternative A"),
        }
    }

    /// Returns shared reference to alternative B.
    ///
    /// # Panics
    ///
    /// Panics if alternative B is not live.
    #[inline]
    #[track_caller]
    pub fn get_value_b(&self) -> &B {
        match &self.slot {
            Slot::B(b) => b,
            _ => violation!("`get_value_b` called on `OptionalPair` not holding alternative B"),
        }
    }

    /// Returns mutable reference to alternative B.
    ///
    /// # Panics
    ///
    /// Panics if alternative B is not live.
    #[inline]
    #[track_caller]
    pub fn get_value_b_mut(&mut self) -> &mut B {
        match &mut self.slot {
            Slot::B(b) => b,
            _ => violation!("`get_value_b_mut` called on `OptionalPair` not holding alternative B"),
        }
    }

    /// Returns shared reference to the alternative selected by `S`.
    ///
    /// # Panics
    ///
    /// Panics if the selected alternative is not live.
    #[inline]
    #[track_caller]
    pub fn get<S: Select<A, B>>(&self) -> &S::Output {
        match S::project(self) {
            Some(value) => value,
            None => violation!("`get` called on `OptionalPair` not holding the selected alternative"),
        }
    }

    /// Returns mutable reference to the alternative selected by `S`.
    ///
    /// # Panics
    ///
    /// Panics if the selected alternative is not live.
    #[inline]
    #[track_caller]
    pub fn get_mut<S: Select<A, B>>(&mut self) -> &mut S::Output {
        match S::project_mut(self) {
            Some(value) => value,
            None => violation!("`get_mut` called on `OptionalPair` not holding the selected alternative"),
        }
    }

    /// Returns shared reference to alternative A, or an [`AccessError`].
    #[inline]
    pub fn try_get_value_a(&self) -> Result<&A, AccessError> {
        match &self.slot {
            Slot::A(a) => Ok(a),
            _ => Err(AccessError::mismatch(Tag::A, self.tag())),
        }
    }

    /// Returns mutable reference to alternative A, or an [`AccessError`].
    #[inline]
    pub fn try_get_value_a_mut(&mut self) -> Result<&mut A, AccessError> {
        let tag = self.tag();
        match &mut self.slot {
            Slot::A(a) => Ok(a),
            _ => Err(AccessError::mismatch(Tag::A, tag)),
        }
    }

    /// Returns shared reference to alternative B, or an [`AccessError`].
    #[inline]
    pub fn try_get_value_b(&self) -> Result<&B, AccessError> {
        match &self.slot {
            Slot::B(b) => Ok(b),
            _ => Err(AccessError::mismatch(Tag::B, self.tag())),
        }
    }

    /// Returns mutable reference to alternative B, or an [`AccessError`].
    #[inline]
    pub fn try_get_value_b_mut(&mut self) -> Result<&mut B, AccessError> {
        let tag = self.tag();
        match &mut self.slot {
            Slot::B(b) => Ok(b),
            _ => Err(AccessError::mismatch(Tag::B, tag)),
        }
    }

    /// Returns shared reference to alternative A without checking the discriminant.
    ///
    /// # Safety
    ///
    /// Alternative A must be live. Debug builds still assert it.
    #[inline]
    pub unsafe fn get_value_a_unchecked(&self) -> &A {
        debug_assert!(self.is_type_a(), "`get_value_a_unchecked` called without alternative A");
        match &self.slot {
            Slot::A(a) => a,
            // SAFETY: caller guarantees alternative A is live
            _ => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Returns shared reference to alternative B without checking the discriminant.
    ///
    /// # Safety
    ///
    /// Alternative B must be live. Debug builds still assert it.
    #[inline]
    pub unsafe fn get_value_b_unchecked(&self) -> &B {
        debug_assert!(self.is_type_b(), "`get_value_b_unchecked` called without alternative B");
        match &self.slot {
            Slot::B(b) => b,
            // SAFETY: caller guarantees alternative B is live
            _ => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Converts to `Option<&A>`, [`None`] unless alternative A is live.
    #[inline]
    pub const fn as_a(&self) -> Option<&A> {
        match &self.slot {
            Slot::A(a) => Some(a),
            _ => None,
        }
    }

    /// Converts to `Option<&B>`, [`None`] unless alternative B is live.
    #[inline]
    pub const fn as_b(&self) -> Option<&B> {
        match &self.slot {
            Slot::B(b) => Some(b),
            _ => None,
        }
    }

    /// Converts to `Option<&mut A>`, [`None`] unless alternative A is live.
    #[inline]
    pub fn as_a_mut(&mut self) -> Option<&mut A> {
        match &mut self.slot {
            Slot::A(a) => Some(a),
            _ => None,
        }
    }

    /// Converts to `Option<&mut B>`, [`None`] unless alternative B is live.
    #[inline]
    pub fn as_b_mut(&mut self) -> Option<&mut B> {
        match &mut self.slot {
            Slot::B(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the live alternative as [`Either`] of references.
    #[inline]
    pub const fn as_either(&self) -> Option<Either<&A, &B>> {
        match &self.slot {
            Slot::None => None,
            Slot::A(a) => Some(Either::Left(a)),
            Slot::B(b) => Some(Either::Right(b)),
        }
    }

    /// Consumes the container, returns the live alternative as [`Either`].
    #[inline]
    pub fn into_either(self) -> Option<Either<A, B>> {
        match self.slot {
            Slot::None => None,
            Slot::A(a) => Some(Either::Left(a)),
            Slot::B(b) => Some(Either::Right(b)),
        }
    }

    // ===== Mutation =====

    /// Set alternative A.
    ///
    /// The live value, of either alternative, is dropped before `value` is placed.
    #[inline]
    pub fn set_value_a(&mut self, value: A) -> &mut A {
        self.clear();
        self.slot = Slot::A(value);
        self.placed::<First>()
    }

    /// Set alternative B.
    ///
    /// The live value, of either alternative, is dropped before `value` is placed.
    #[inline]
    pub fn set_value_b(&mut self, value: B) -> &mut B {
        self.clear();
        self.slot = Slot::B(value);
        self.placed::<Second>()
    }

    /// Set alternative A by copying from `value`.
    ///
    /// If alternative A is live it is reused through [`Clone::clone_from`], otherwise the live
    /// value is dropped before the copy is placed.
    pub fn assign_a(&mut self, value: &A) -> &mut A
    where
        A: Clone,
    {
        match &mut self.slot {
            Slot::A(current) => current.clone_from(value),
            _ => {
                self.clear();
                self.slot = Slot::A(value.clone());
            }
        }
        self.placed::<First>()
    }

    /// Set alternative B by copying from `value`.
    ///
    /// If alternative B is live it is reused through [`Clone::clone_from`], otherwise the live
    /// value is dropped before the copy is placed.
    pub fn assign_b(&mut self, value: &B) -> &mut B
    where
        B: Clone,
    {
        match &mut self.slot {
            Slot::B(current) => current.clone_from(value),
            _ => {
                self.clear();
                self.slot = Slot::B(value.clone());
            }
        }
        self.placed::<Second>()
    }

    /// Move `value` into alternative A.
    ///
    /// If alternative A is live, `value` is assigned over it. Otherwise the live alternative B,
    /// if any, is dropped first.
    #[inline]
    pub fn emplace_move_a(&mut self, value: A) -> &mut A {
        match &mut self.slot {
            Slot::A(current) => *current = value,
            _ => {
                self.clear();
                self.slot = Slot::A(value);
            }
        }
        self.placed::<First>()
    }

    /// Move `value` into alternative B.
    ///
    /// If alternative B is live, `value` is assigned over it. Otherwise the live alternative A,
    /// if any, is dropped first.
    #[inline]
    pub fn emplace_move_b(&mut self, value: B) -> &mut B {
        match &mut self.slot {
            Slot::B(current) => *current = value,
            _ => {
                self.clear();
                self.slot = Slot::B(value);
            }
        }
        self.placed::<Second>()
    }

    /// Replace the content with `value` as the alternative selected by `S`.
    #[inline]
    pub fn emplace<S: Select<A, B>>(&mut self, value: S::Output) -> &mut S::Output {
        self.emplace_with::<S, _>(|| value)
    }

    /// Replace the content with the result of `f` as the alternative selected by `S`.
    ///
    /// The live value, if any, is dropped before `f` is called.
    ///
    /// ```
    /// use optpair::{First, OptionalPair};
    ///
    /// let mut pair = OptionalPair::<String, u8>::from_b(4);
    /// pair.emplace_with::<First, _>(|| String::from("foo")).push('!');
    /// assert_eq!(pair.get_value_a(), "foo!");
    /// ```
    #[inline]
    pub fn emplace_with<S, F>(&mut self, f: F) -> &mut S::Output
    where
        S: Select<A, B>,
        F: FnOnce() -> S::Output,
    {
        self.clear();
        S::place(self, f());
        self.placed::<S>()
    }

    /// Set the alternative selected by `S` to its default value.
    ///
    /// # Panics
    ///
    /// Panics if the container is already set.
    #[inline]
    #[track_caller]
    pub fn default_initialize<S>(&mut self) -> &mut S::Output
    where
        S: Select<A, B>,
        S::Output: Default,
    {
        contract!(!self.is_set(), "`default_initialize` called on set `OptionalPair`");
        S::place(self, Default::default());
        self.placed::<S>()
    }

    /// Drop the live value, if any, leaving the container empty.
    #[inline]
    pub fn clear(&mut self) {
        if self.is_set() {
            trace!("dropping {} of `OptionalPair`", self.tag());
            self.slot = Slot::None;
        }
    }

    /// Moves the content out into a new container, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> OptionalPair<A, B> {
        if self.is_set() {
            trace!("taking {} out of `OptionalPair`", self.tag());
        }
        OptionalPair { slot: mem::replace(&mut self.slot, Slot::None) }
    }

    /// Maps alternative A with `f`, alternative B is kept as is.
    pub fn map_a<C, F: FnOnce(A) -> C>(self, f: F) -> OptionalPair<C, B> {
        match self.slot {
            Slot::None => OptionalPair::new(),
            Slot::A(a) => OptionalPair::from_a(f(a)),
            Slot::B(b) => OptionalPair::from_b(b),
        }
    }

    /// Maps alternative B with `f`, alternative A is kept as is.
    pub fn map_b<C, F: FnOnce(B) -> C>(self, f: F) -> OptionalPair<A, C> {
        match self.slot {
            Slot::None => OptionalPair::new(),
            Slot::A(a) => OptionalPair::from_a(a),
            Slot::B(b) => OptionalPair::from_b(f(b)),
        }
    }

    #[inline]
    fn placed<S: Select<A, B>>(&mut self) -> &mut S::Output {
        match S::project_mut(self) {
            Some(value) => value,
            // SAFETY: only called right after the selected alternative is placed
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}

// ===== Std traits =====

impl<A, B> Default for OptionalPair<A, B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone, B: Clone> Clone for OptionalPair<A, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: self.slot.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        match (&mut self.slot, &source.slot) {
            (Slot::A(to), Slot::A(from)) => to.clone_from(from),
            (Slot::B(to), Slot::B(from)) => to.clone_from(from),
            (slot, from) => {
                *slot = Slot::None;
                *slot = from.clone();
            }
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for OptionalPair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalPair").field(&self.slot).finish()
    }
}

impl<A, B> From<Either<A, B>> for OptionalPair<A, B> {
    #[inline]
    fn from(value: Either<A, B>) -> Self {
        match value {
            Either::Left(a) => Self::from_a(a),
            Either::Right(b) => Self::from_b(b),
        }
    }
}
