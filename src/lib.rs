//! # `stack_variant` - Stack-Allocated Tagged Union
//!
//! A discriminated union over a fixed, compile-time list of alternative types.
//! A `StackVariant` holds exactly one alternative (or nothing) in a single
//! inline storage slot sized and aligned for the largest alternative. No heap
//! allocation is ever performed by the variant itself.
//!
//! ## Architecture
//!
//! The crate is stratified into three layers:
//!
//! 1. **Type lists** (`list`):
//!    - `Cons<H, T>` / `Nil` encode the ordered alternative set
//!    - Size, alignment and length folds are associated consts
//!    - Exact membership (`Member`) and conversion (`Convertible`) are resolved
//!      by the trait solver through inferred index witnesses
//!
//! 2. **Storage slot** (`slot`):
//!    - A zero-initialized region laid out as a `#[repr(C)]` union chain
//!    - Unchecked reinterpretation, concentrated in one audited module
//!
//! 3. **Variant** (`variant`):
//!    - Owns one slot plus the held index, with `LEN` as the empty sentinel
//!    - Checked access returning `BadVariantAccess` on misuse
//!    - Runs the live alternative's destructor on clear, re-assignment and drop
//!
//! ## Compile-time contracts
//!
//! Assigning a type that is not an alternative, a conversion that reaches no
//! alternative (or more than one), duplicate alternatives, and empty lists are
//! all rejected by the compiler. The only runtime failures are the two
//! `BadVariantAccess` cases.
//!
//! ## Example
//!
//! ```rust
//! use stack_variant::{types, BadVariantAccess, StackVariant};
//!
//! let mut value: StackVariant<types![i32, String]> = StackVariant::new();
//! assert!(value.is_empty());
//!
//! value.assign(String::from("hello"));
//! assert_eq!(value.get::<String, _>().map(String::as_str), Ok("hello"));
//! assert!(matches!(
//!     value.get::<i32, _>(),
//!     Err(BadVariantAccess::TypeMismatch { .. })
//! ));
//!
//! // `i16` is not an alternative but widens to exactly one of them.
//! value.assign_coerced(7_i16);
//! assert_eq!(value.get::<i32, _>(), Ok(&7));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event for a variant state transition.
///
/// Expands to nothing unless the `tracing` feature is enabled.
macro_rules! trace_transition {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod list;
pub mod slot;
pub mod variant;

#[cfg(feature = "proptest")]
pub mod strategy;

pub use list::{
    alignof_max, index_of, sizeof_max, CloneList, Coerce, Cons, Convertible, Here, Member, Nil,
    NonEmpty, StaticTypeList, There, TypeList,
};
pub use slot::Slot;
pub use variant::{BadVariantAccess, StackVariant};

// Compile-time assertions for layout claims.
const _: () = {
    use core::mem;

    // Fold results match the primitive layouts they summarize.
    assert!(sizeof_max::<types![u8, u64, u16]>() == mem::size_of::<u64>());
    assert!(alignof_max::<types![u8, u64, u16]>() == mem::align_of::<u64>());
    assert!(<types![u8]>::LEN == 1);

    // The slot never needs more than the largest alternative rounded to its alignment.
    assert!(mem::size_of::<Slot<types![u8, [u8; 3]]>>() == 3);
    assert!(mem::align_of::<Slot<types![u8, u32]>>() == mem::align_of::<u32>());
};
