//! Exact membership of a type in a type list.
//!
//! `Member<T, I>` is implemented for a list exactly when `T` is one of its
//! types, with `I` the witness of its position. The witness is inferred at the
//! use site, which turns the lookup into a compile-time contract:
//! - `T` absent: no impl applies, compile error.
//! - `T` listed twice: two witnesses apply, the inference is ambiguous, compile error.

use core::any::TypeId;

use super::{Cons, Here, Nil, There, TypeList};

/// `T` appears in the list at index `INDEX`, located by witness `I`.
pub trait Member<T, I>: TypeList {
    /// Zero-based position of `T` in the list.
    const INDEX: usize;
}

impl<H, Tail: TypeList> Member<H, Here> for Cons<H, Tail> {
    const INDEX: usize = 0;
}

impl<H, Tail, T, I> Member<T, There<I>> for Cons<H, Tail>
where
    Tail: Member<T, I>,
{
    const INDEX: usize = 1 + <Tail as Member<T, I>>::INDEX;
}

/// Zero-based position of `T` in `L`.
///
/// Fails to compile when `T` is not in `L`.
pub const fn index_of<L, T, I>() -> usize
where
    L: Member<T, I>,
{
    L::INDEX
}

/// Runtime membership queries for lists of `'static` types.
///
/// These compare `TypeId`s, so they answer the same *exact* question as
/// `Member` (no conversions), but for a type only known to the caller at runtime
/// or through a generic parameter without a `Member` bound.
pub trait StaticTypeList: TypeList + 'static {
    /// Position of the first occurrence of `T`, if any.
    fn position<T: ?Sized + 'static>() -> Option<usize> {
        Self::position_of(TypeId::of::<T>())
    }

    /// Position of the first type whose `TypeId` is `id`, if any.
    fn position_of(id: TypeId) -> Option<usize>;

    /// Returns `true` iff `T` appears in the list.
    fn has_type<T: ?Sized + 'static>() -> bool {
        Self::position::<T>().is_some()
    }
}

impl StaticTypeList for Nil {
    fn position_of(_id: TypeId) -> Option<usize> {
        None
    }
}

impl<H: 'static, Tail: StaticTypeList> StaticTypeList for Cons<H, Tail> {
    fn position_of(id: TypeId) -> Option<usize> {
        if TypeId::of::<H>() == id {
            Some(0)
        } else {
            Tail::position_of(id).map(|index| index + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    type Primitives = types![u8, String, f64, (u8, u8)];

    #[test]
    fn test_index_of_each_member() {
        assert_eq!(index_of::<Primitives, u8, _>(), 0);
        assert_eq!(index_of::<Primitives, String, _>(), 1);
        assert_eq!(index_of::<Primitives, f64, _>(), 2);
        assert_eq!(index_of::<Primitives, (u8, u8), _>(), 3);
    }

    #[test]
    fn test_index_of_is_usable_in_const_context() {
        const INDEX: usize = <Primitives as Member<f64, There<There<Here>>>>::INDEX;
        assert_eq!(INDEX, 2);
    }

    #[test]
    fn test_has_type_is_exact() {
        assert!(Primitives::has_type::<u8>());
        assert!(Primitives::has_type::<String>());
        // Convertible to `f64`, but not listed.
        assert!(!Primitives::has_type::<f32>());
        assert!(!Primitives::has_type::<str>());
        assert!(!Nil::has_type::<u8>());
    }

    #[test]
    fn test_position_agrees_with_index_of() {
        assert_eq!(Primitives::position::<String>(), Some(index_of::<Primitives, String, _>()));
        assert_eq!(Primitives::position::<(u8, u8)>(), Some(3));
        assert_eq!(Primitives::position::<u16>(), None);
    }

    #[test]
    fn test_position_with_duplicates_resolves_first() {
        type Duplicated = types![u8, u16, u8];
        assert_eq!(Duplicated::position::<u8>(), Some(0));
    }
}
