//! Unsafe, centralized pointer operations on slot storage.
//!
//! Slots store alternatives by reinterpreting one untyped region as whichever
//! type is live. These helpers provide a single place to audit:
//! - reads (`ptr::read`)
//! - writes (`ptr::write`)
//! - drops (`drop_in_place`)
//! - conversion to references
//!
//! ## Core invariant
//! Every pointer handed to these helpers points at offset 0 of a slot whose
//! storage is at least as large and as aligned as the pointee type.
//! Callers additionally guarantee, through the variant's held index, that the
//! pointee is initialized whenever it is read, referenced or dropped.

use core::ptr;

/// Interprets a pointer to an initialized value as `&T`.
///
/// # Safety
/// - `ptr` must be aligned and point to an initialized `T`.
/// - The returned `&T` must not outlive the storage nor alias an outstanding `&mut T`.
#[inline(always)]
pub(crate) unsafe fn assume_ref<'a, T>(ptr: *const T) -> &'a T {
    // SAFETY: caller asserts alignment, initialization and aliasing.
    unsafe { &*ptr }
}

/// Interprets a pointer to an initialized value as `&mut T`.
///
/// # Safety
/// - `ptr` must be aligned and point to an initialized `T`.
/// - The returned `&mut T` must be exclusive for its lifetime.
#[inline(always)]
pub(crate) unsafe fn assume_mut<'a, T>(ptr: *mut T) -> &'a mut T {
    // SAFETY: caller asserts alignment, initialization and exclusivity.
    unsafe { &mut *ptr }
}

/// Bitwise-moves an initialized value out of storage.
///
/// # Safety
/// - `ptr` must be aligned and point to an initialized `T`.
/// - The storage must afterwards be treated as uninitialized (no second read or drop).
#[inline(always)]
pub(crate) unsafe fn read_ptr<T>(ptr: *const T) -> T {
    // SAFETY: caller upholds the `ptr::read` contract.
    unsafe { ptr::read(ptr) }
}

/// Writes a value into storage without dropping the prior contents.
///
/// # Safety
/// - `ptr` must be aligned and valid for writes of `T`.
/// - Any live value previously stored there must already have been dropped or
///   moved out; otherwise it leaks.
#[inline(always)]
pub(crate) unsafe fn write_ptr<T>(ptr: *mut T, value: T) {
    // SAFETY: caller upholds the overwrite contract.
    unsafe { ptr::write(ptr, value) }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `ptr` must be aligned and point to an initialized `T`.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place_ptr<T>(ptr: *mut T) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(ptr) }
}
