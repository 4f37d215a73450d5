//! `Slot` — fixed-size inline storage for one alternative of a type list.
//!
//! A slot is a zero-initialized region laid out as `L::Storage`, a `#[repr(C)]`
//! union of every alternative. It is therefore exactly as aligned as the most
//! aligned alternative and large enough for the largest one, and every
//! alternative lives at offset 0.
//!
//! The slot itself tracks nothing: it does not know which alternative (if any)
//! is live, and its accessors reinterpret the region without checks. All type
//! safety is enforced one layer up by `StackVariant`'s held index.
//!
//! Reinterpreting as a type that does not fit the slot is rejected when the
//! accessor is instantiated.

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};

use crate::list::TypeList;

pub(crate) mod raw;

/// Inline storage sized and aligned for any type of `L`.
pub struct Slot<L: TypeList> {
    storage: MaybeUninit<L::Storage>,
    _list: PhantomData<L>,
}

/// Compile-time proof that `T` fits a slot for `L`.
struct Fits<L, T>(PhantomData<(L, T)>);

impl<L: TypeList, T> Fits<L, T> {
    const OK: () = assert!(
        mem::size_of::<T>() <= mem::size_of::<L::Storage>()
            && mem::align_of::<T>() <= mem::align_of::<L::Storage>(),
        "type does not fit the storage slot"
    );
}

impl<L: TypeList> Slot<L> {
    /// Size of the region in bytes.
    pub const SIZE: usize = mem::size_of::<L::Storage>();

    /// Alignment of the region in bytes.
    pub const ALIGN: usize = mem::align_of::<L::Storage>();

    /// Creates a zeroed slot.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: MaybeUninit::zeroed(),
            _list: PhantomData,
        }
    }

    /// Overwrites the region with zeroes.
    ///
    /// Does not run any destructor; a live value is forgotten.
    #[inline]
    pub fn zero(&mut self) {
        self.storage = MaybeUninit::zeroed();
    }

    /// Raw pointer to offset 0 of the region.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.storage.as_ptr().cast()
    }

    /// Mutable raw pointer to offset 0 of the region.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.storage.as_mut_ptr().cast()
    }

    /// Reinterprets the region as `&T`.
    ///
    /// # Safety
    /// The region must hold an initialized `T`, last written as `T`.
    #[inline]
    pub unsafe fn access<T>(&self) -> &T {
        let () = Fits::<L, T>::OK;
        // SAFETY: `Fits` guarantees size/alignment; caller guarantees initialization.
        unsafe { raw::assume_ref(self.storage.as_ptr().cast::<T>()) }
    }

    /// Reinterprets the region as `&mut T`.
    ///
    /// # Safety
    /// The region must hold an initialized `T`, last written as `T`.
    #[inline]
    pub unsafe fn access_mut<T>(&mut self) -> &mut T {
        let () = Fits::<L, T>::OK;
        // SAFETY: `Fits` guarantees size/alignment; caller guarantees initialization.
        unsafe { raw::assume_mut(self.storage.as_mut_ptr().cast::<T>()) }
    }

    /// Writes `value` at offset 0, overwriting `size_of::<T>()` bytes.
    ///
    /// # Safety
    /// Any value live in the region must already have been dropped or moved
    /// out; it is overwritten without running its destructor.
    #[inline]
    pub unsafe fn write<T>(&mut self, value: T) {
        let () = Fits::<L, T>::OK;
        // SAFETY: `Fits` guarantees size/alignment; caller owns the overwrite.
        unsafe { raw::write_ptr(self.storage.as_mut_ptr().cast::<T>(), value) }
    }

    /// Moves a `T` out of the region bitwise.
    ///
    /// # Safety
    /// The region must hold an initialized `T`, and must be treated as
    /// holding nothing afterwards.
    #[inline]
    pub unsafe fn read<T>(&self) -> T {
        let () = Fits::<L, T>::OK;
        // SAFETY: `Fits` guarantees size/alignment; caller guarantees initialization.
        unsafe { raw::read_ptr(self.storage.as_ptr().cast::<T>()) }
    }

    /// Runs the destructor of the type at `index` of `L` on the region.
    ///
    /// # Safety
    /// The region must hold an initialized value of that type, which must not
    /// be used or dropped again.
    #[inline]
    pub unsafe fn drop_in_place_at(&mut self, index: usize) {
        // SAFETY: forwarded contract.
        unsafe { L::drop_at(index, self.as_mut_ptr()) }
    }
}

impl<L: TypeList> Default for Slot<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TypeList> fmt::Debug for Slot<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("size", &Self::SIZE)
            .field("align", &Self::ALIGN)
            .finish_non_exhaustive()
    }
}
