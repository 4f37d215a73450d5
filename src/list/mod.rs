//! Compile-time type lists.
//!
//! An alternative set is encoded as a cons list of types: `Cons<A, Cons<B, Nil>>`,
//! normally written `types![A, B]`. All metadata about the list (length, maximum
//! size, maximum alignment, storage layout) is computed by trait recursion and
//! lives in associated consts, so it is available at compile time.
//!
//! Type lookups are resolved by the trait solver through *index witnesses*:
//! `Here` means "the head of this list", `There<I>` means "index `I` of the
//! tail". Callers never name the witness; it is inferred, and an absent or
//! ambiguous lookup is a compile error.
//!
//! ## Core invariant
//! For every list `L` and every alternative `A` of `L`:
//! - `size_of::<A>() <= L::SIZE_MAX`
//! - `align_of::<A>() <= L::ALIGN_MAX`
//! - `L::Storage` places `A` at offset 0 with at least that size and alignment.

use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};

use crate::slot::raw;

pub mod coerce;
pub mod member;

mod macros;

pub use coerce::{Coerce, Convertible};
pub use member::{index_of, Member, StaticTypeList};

/// The empty type list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

/// A type list with head `H` and tail `T`.
///
/// Purely a marker; never constructed.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// Index witness selecting the head of a list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Index witness selecting position `I` of the tail of a list.
#[derive(Debug, Clone, Copy, Default)]
pub struct There<I>(PhantomData<I>);

/// Inline storage for the alternatives of a `Cons` list.
///
/// Every field lives at offset 0, so the union is as large as its largest
/// field and as aligned as its most aligned field.
#[doc(hidden)]
#[repr(C)]
pub union UnionCons<H, T> {
    head: ManuallyDrop<H>,
    tail: ManuallyDrop<T>,
}

/// Metadata shared by every type list.
pub trait TypeList {
    /// Number of types in the list.
    const LEN: usize;

    /// Largest `size_of` across the list (`0` for `Nil`).
    const SIZE_MAX: usize;

    /// Largest `align_of` across the list (`1` for `Nil`).
    const ALIGN_MAX: usize;

    /// Storage able to hold any single type of the list at offset 0.
    type Storage;

    /// Returns the name of the type at `index`, or `None` when out of range.
    fn type_name_at(index: usize) -> Option<&'static str>;

    /// Runs the destructor of the type at `index` on the value behind `ptr`.
    ///
    /// # Safety
    /// - `ptr` must point to an initialized value of the type at `index`.
    /// - The value must not be used or dropped again afterwards.
    unsafe fn drop_at(index: usize, ptr: *mut u8);
}

/// Marker for lists with at least one type.
///
/// Variants require a non-empty alternative set.
pub trait NonEmpty: TypeList {}

/// Type lists whose every type is `Clone`.
pub trait CloneList: TypeList {
    /// Clones the value of the type at `index` from `src` into `dst`.
    ///
    /// # Safety
    /// - `src` must point to an initialized value of the type at `index`.
    /// - `dst` must be valid for writes of that type and hold no live value.
    unsafe fn clone_at(index: usize, src: *const u8, dst: *mut u8);
}

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

impl TypeList for Nil {
    const LEN: usize = 0;
    const SIZE_MAX: usize = 0;
    const ALIGN_MAX: usize = 1;

    type Storage = ();

    fn type_name_at(_index: usize) -> Option<&'static str> {
        None
    }

    // Reached only past the last alternative, where nothing is live.
    unsafe fn drop_at(_index: usize, _ptr: *mut u8) {}
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
    const SIZE_MAX: usize = max(mem::size_of::<H>(), T::SIZE_MAX);
    const ALIGN_MAX: usize = max(mem::align_of::<H>(), T::ALIGN_MAX);

    type Storage = UnionCons<H, T::Storage>;

    fn type_name_at(index: usize) -> Option<&'static str> {
        match index {
            0 => Some(core::any::type_name::<H>()),
            _ => T::type_name_at(index - 1),
        }
    }

    #[inline]
    unsafe fn drop_at(index: usize, ptr: *mut u8) {
        if index == 0 {
            // SAFETY: caller asserts `ptr` holds a live `H`.
            unsafe { raw::drop_in_place_ptr(ptr.cast::<H>()) }
        } else {
            // SAFETY: forwarded contract, shifted into the tail.
            unsafe { T::drop_at(index - 1, ptr) }
        }
    }
}

impl<H, T: TypeList> NonEmpty for Cons<H, T> {}

impl CloneList for Nil {
    unsafe fn clone_at(_index: usize, _src: *const u8, _dst: *mut u8) {}
}

impl<H: Clone, T: CloneList> CloneList for Cons<H, T> {
    #[inline]
    unsafe fn clone_at(index: usize, src: *const u8, dst: *mut u8) {
        if index == 0 {
            // SAFETY: caller asserts `src` holds a live `H` and `dst` is writable.
            unsafe {
                let value = raw::assume_ref(src.cast::<H>()).clone();
                raw::write_ptr(dst.cast::<H>(), value);
            }
        } else {
            // SAFETY: forwarded contract, shifted into the tail.
            unsafe { T::clone_at(index - 1, src, dst) }
        }
    }
}

/// Largest `size_of` across the list `L`.
pub const fn sizeof_max<L: TypeList>() -> usize {
    L::SIZE_MAX
}

/// Largest `align_of` across the list `L`.
pub const fn alignof_max<L: TypeList>() -> usize {
    L::ALIGN_MAX
}
