//! `StackVariant` — a tagged union over a compile-time type list.
//!
//! A variant owns one `Slot` sized for its alternatives plus the *held index*:
//! the position of the live alternative, or `L::LEN` when empty.
//!
//! ## State machine
//! - `Empty → Holding(i)`: `with`, `coerced`, `assign`, `assign_coerced`.
//! - `Holding(i) → Holding(i)`: re-assignment overwrites in place. The previous
//!   value is dropped by the assignment; the slot is not zeroed.
//! - `Holding(i) → Holding(j)`, `i != j`: the live value is dropped, the slot is
//!   zeroed, then the new value is written.
//! - `Holding(i) → Empty`: `clear` or `take`.
//! - `Empty → Empty`: `clear` does nothing.
//!
//! ## Core invariant
//! `held < L::LEN` exactly when the slot holds an initialized value of the
//! type at index `held`. Every unsafe slot access below is justified by
//! checking `held` first.
//!
//! ## Resolution
//! Exact alternatives go through `Member<T, I>`; values that are not an
//! alternative go through `Convertible<T, I>` (see `Coerce`). Both resolve at
//! compile time, so the index witness `I` is always written `_`:
//!
//! ```rust
//! use stack_variant::{types, StackVariant};
//!
//! let mut v: StackVariant<types![u8, String]> = StackVariant::with(3_u8);
//! assert!(v.is::<u8, _>());
//! v.assign_coerced("now a string");
//! assert_eq!(v.index(), Some(1));
//! ```
//!
//! A type that is not an alternative is rejected by the compiler:
//!
//! ```compile_fail
//! use stack_variant::{types, StackVariant};
//!
//! let mut v: StackVariant<types![u8, String]> = StackVariant::new();
//! v.assign(1_u32);
//! ```
//!
//! So is a variant without alternatives:
//!
//! ```compile_fail
//! use stack_variant::{types, StackVariant};
//!
//! let v: StackVariant<types![]> = StackVariant::new();
//! ```

use core::fmt;

use crate::list::{CloneList, Convertible, Member, NonEmpty};
use crate::slot::Slot;

mod error;

pub use error::BadVariantAccess;

/// A value of exactly one type from `L`, or nothing, stored inline.
pub struct StackVariant<L: NonEmpty> {
    slot: Slot<L>,
    held: usize,
}

impl<L: NonEmpty> StackVariant<L> {
    /// Number of alternatives.
    pub const ALTERNATIVES: usize = L::LEN;

    /// Held index of an empty variant.
    const EMPTY: usize = L::LEN;

    /// Creates an empty variant.
    #[inline]
    pub fn new() -> Self {
        Self {
            slot: Slot::new(),
            held: Self::EMPTY,
        }
    }

    /// Creates a variant holding `value`, an exact alternative.
    ///
    /// A reference alternative (`&'a T`, `&'a mut T`) stores the address;
    /// the referent is never copied.
    #[inline]
    pub fn with<T, I>(value: T) -> Self
    where
        L: Member<T, I>,
    {
        let mut variant = Self::new();
        variant.assign(value);
        variant
    }

    /// Creates a variant holding `value` converted to the only alternative it
    /// coerces to.
    #[inline]
    pub fn coerced<T, I>(value: T) -> Self
    where
        L: Convertible<T, I>,
    {
        let mut variant = Self::new();
        variant.assign_coerced(value);
        variant
    }

    /// Returns `true` if no alternative is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.held == Self::EMPTY
    }

    /// Index of the held alternative, or `None` when empty.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.held)
    }

    /// Returns `true` if the held alternative is `T`.
    ///
    /// Always `false` when empty.
    #[inline]
    pub fn is<T, I>(&self) -> bool
    where
        L: Member<T, I>,
    {
        self.held == <L as Member<T, I>>::INDEX
    }

    /// Stores `value`, an exact alternative.
    ///
    /// Returns `self` to allow chaining.
    pub fn assign<T, I>(&mut self, value: T) -> &mut Self
    where
        L: Member<T, I>,
    {
        // SAFETY: `INDEX` is the position of `T` in `L`.
        unsafe { self.store(<L as Member<T, I>>::INDEX, value) };
        self
    }

    /// Stores `value` converted to the only alternative it coerces to.
    ///
    /// Returns `self` to allow chaining.
    pub fn assign_coerced<T, I>(&mut self, value: T) -> &mut Self
    where
        L: Convertible<T, I>,
    {
        let converted = L::convert(value);
        // SAFETY: `INDEX` is the position of `Target` in `L`.
        unsafe { self.store(<L as Convertible<T, I>>::INDEX, converted) };
        self
    }

    /// Drops the held alternative, if any, and zeroes the slot.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        let held = self.held;
        // Mark empty before dropping so a panicking destructor cannot run twice.
        self.held = Self::EMPTY;
        // SAFETY: `held` was the live alternative and is no longer reachable.
        unsafe { self.slot.drop_in_place_at(held) };
        self.slot.zero();
        trace_transition!(held, "variant cleared");
    }

    /// Returns the held `T`.
    ///
    /// # Errors
    /// `BadVariantAccess::Empty` when nothing is held,
    /// `BadVariantAccess::TypeMismatch` when another alternative is held.
    #[inline]
    pub fn get<T, I>(&self) -> Result<&T, BadVariantAccess>
    where
        L: Member<T, I>,
    {
        self.check::<T, I>()?;
        // SAFETY: `check` proved a `T` is live.
        Ok(unsafe { self.slot.access::<T>() })
    }

    /// Returns the held `T` mutably.
    ///
    /// # Errors
    /// `BadVariantAccess::Empty` when nothing is held,
    /// `BadVariantAccess::TypeMismatch` when another alternative is held.
    #[inline]
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, BadVariantAccess>
    where
        L: Member<T, I>,
    {
        self.check::<T, I>()?;
        // SAFETY: `check` proved a `T` is live.
        Ok(unsafe { self.slot.access_mut::<T>() })
    }

    /// Follows a held `&'r R` alternative to its referent.
    ///
    /// # Errors
    /// As `get::<&'r R, _>()`.
    #[inline]
    pub fn referent<'s, 'r: 's, R: ?Sized + 'r, I>(&'s self) -> Result<&'s R, BadVariantAccess>
    where
        L: Member<&'r R, I>,
    {
        self.get::<&'r R, I>().map(|reference| &**reference)
    }

    /// Follows a held `&'r mut R` alternative to its referent.
    ///
    /// # Errors
    /// As `get_mut::<&'r mut R, _>()`.
    #[inline]
    pub fn referent_mut<'s, 'r: 's, R: ?Sized + 'r, I>(
        &'s mut self,
    ) -> Result<&'s mut R, BadVariantAccess>
    where
        L: Member<&'r mut R, I>,
    {
        self.get_mut::<&'r mut R, I>().map(|reference| &mut **reference)
    }

    /// Moves the held `T` out, leaving the variant empty.
    ///
    /// # Errors
    /// As `get`; the variant is left unchanged on error.
    pub fn take<T, I>(&mut self) -> Result<T, BadVariantAccess>
    where
        L: Member<T, I>,
    {
        self.check::<T, I>()?;
        self.held = Self::EMPTY;
        // SAFETY: `check` proved a `T` is live; the held index no longer claims it.
        let value = unsafe { self.slot.read::<T>() };
        self.slot.zero();
        trace_transition!(index = <L as Member<T, I>>::INDEX, "variant taken");
        Ok(value)
    }

    fn check<T, I>(&self) -> Result<(), BadVariantAccess>
    where
        L: Member<T, I>,
    {
        let requested = <L as Member<T, I>>::INDEX;
        if self.is_empty() {
            Err(BadVariantAccess::Empty)
        } else if self.held != requested {
            Err(BadVariantAccess::TypeMismatch {
                held: self.held,
                requested,
            })
        } else {
            Ok(())
        }
    }

    /// Stores `value` at alternative `index`.
    ///
    /// # Safety
    /// `index` must be the position of `T` in `L`.
    unsafe fn store<T>(&mut self, index: usize, value: T) {
        if self.held == index {
            // SAFETY: the held index is `T`'s, so a `T` is live; the assignment drops it.
            unsafe { *self.slot.access_mut::<T>() = value };
            trace_transition!(index, "variant overwritten in place");
            return;
        }
        self.clear();
        // SAFETY: cleared, so nothing live is overwritten; caller vouches for `index`.
        unsafe { self.slot.write(value) };
        self.held = index;
        trace_transition!(index, "variant assigned");
    }
}

impl<L: NonEmpty> Default for StackVariant<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: NonEmpty> Drop for StackVariant<L> {
    fn drop(&mut self) {
        if !self.is_empty() {
            // SAFETY: `held` is live and the variant is never used again.
            unsafe { self.slot.drop_in_place_at(self.held) };
        }
    }
}

impl<L: NonEmpty + CloneList> Clone for StackVariant<L> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        if !self.is_empty() {
            // SAFETY: `held` is live in `self`; `out` is empty.
            unsafe { L::clone_at(self.held, self.slot.as_ptr(), out.slot.as_mut_ptr()) };
            out.held = self.held;
        }
        out
    }
}

impl<L: NonEmpty> fmt::Debug for StackVariant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            None => f.write_str("StackVariant(Empty)"),
            Some(index) => f
                .debug_struct("StackVariant")
                .field("index", &index)
                .field("type", &L::type_name_at(index).unwrap_or("?"))
                .finish(),
        }
    }
}
