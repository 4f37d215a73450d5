//! Implicit conversions into a type list.
//!
//! `Coerce<Target>` is the crate's notion of an implicit conversion: a
//! lossless, non-reflexive conversion that assignment is allowed to apply on
//! the caller's behalf. The provided impls cover widening numeric conversions
//! and string-like sources into `String`; downstream crates may add impls for
//! their own types.
//!
//! `Convertible<T, I>` locates the alternative `T` coerces to. A list is
//! convertible from `T` only when exactly one of its types is a `Coerce`
//! target of `T`; with two or more targets the witness `I` cannot be inferred
//! and the assignment does not compile.
//!
//! ```compile_fail
//! use stack_variant::{types, StackVariant};
//!
//! // `i32` widens to both `i64` and `f64`.
//! let mut v: StackVariant<types![i64, f64]> = StackVariant::new();
//! v.assign_coerced(1_i32);
//! ```

use super::{Cons, Here, There, TypeList};

/// A lossless implicit conversion into `Target`.
///
/// Never implemented for `Target` itself: an exact alternative is resolved
/// through `Member`, not through conversion.
pub trait Coerce<Target> {
    /// Converts `self` into `Target`.
    fn coerce(self) -> Target;
}

macro_rules! coerce_via_from {
    ($($from:ty => [$($to:ty),* $(,)?];)*) => {
        $($(
            impl Coerce<$to> for $from {
                #[inline]
                fn coerce(self) -> $to {
                    <$to>::from(self)
                }
            }
        )*)*
    };
}

coerce_via_from! {
    i8 => [i16, i32, i64, i128, isize, f32, f64];
    i16 => [i32, i64, i128, isize, f32, f64];
    i32 => [i64, i128, f64];
    i64 => [i128];
    u8 => [u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64];
    u16 => [u32, u64, u128, usize, i32, i64, i128, f32, f64];
    u32 => [u64, u128, i64, i128, f64];
    u64 => [u128, i128];
    f32 => [f64];
    char => [u32, u64, u128, String];
    Box<str> => [String];
}

impl Coerce<String> for &str {
    #[inline]
    fn coerce(self) -> String {
        String::from(self)
    }
}

/// The list has exactly one type `T` coerces to, located by witness `I`.
pub trait Convertible<T, I>: TypeList {
    /// The alternative `T` converts to.
    type Target;

    /// Zero-based position of `Target` in the list.
    const INDEX: usize;

    /// Performs the conversion.
    fn convert(value: T) -> Self::Target;
}

impl<H, Tail: TypeList, T: Coerce<H>> Convertible<T, Here> for Cons<H, Tail> {
    type Target = H;

    const INDEX: usize = 0;

    #[inline]
    fn convert(value: T) -> H {
        value.coerce()
    }
}

impl<H, Tail, T, I> Convertible<T, There<I>> for Cons<H, Tail>
where
    Tail: Convertible<T, I>,
{
    type Target = Tail::Target;

    const INDEX: usize = 1 + <Tail as Convertible<T, I>>::INDEX;

    #[inline]
    fn convert(value: T) -> Self::Target {
        Tail::convert(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;
    use core::any::TypeId;

    fn conversion_of<L, T, I>(value: T) -> (usize, L::Target)
    where
        L: Convertible<T, I>,
    {
        (L::INDEX, L::convert(value))
    }

    fn target_id<L, T, I>() -> TypeId
    where
        L: Convertible<T, I>,
        L::Target: 'static,
    {
        TypeId::of::<L::Target>()
    }

    #[test]
    fn test_narrow_integer_finds_wider_alternative() {
        type L = types![String, i32];
        assert_eq!(conversion_of::<L, _, _>(7_i16), (1, 7_i32));
        assert_eq!(target_id::<L, i16, _>(), TypeId::of::<i32>());
    }

    #[test]
    fn test_str_finds_string_alternative() {
        type L = types![u8, String];
        let (index, value) = conversion_of::<L, _, _>("text");
        assert_eq!(index, 1);
        assert_eq!(value, "text");
    }

    #[test]
    fn test_char_and_boxed_str_into_string() {
        type L = types![bool, String];
        assert_eq!(conversion_of::<L, _, _>('x').1, "x");
        assert_eq!(conversion_of::<L, _, _>(Box::<str>::from("boxed")).1, "boxed");
    }

    #[test]
    fn test_float_widening() {
        type L = types![f64, u8];
        assert_eq!(conversion_of::<L, _, _>(1.5_f32), (0, 1.5_f64));
    }

    #[test]
    fn test_conversion_skips_the_source_type_even_when_listed() {
        // `i32` is listed, but conversion only considers `Coerce` targets.
        type L = types![i32, i64];
        assert_eq!(conversion_of::<L, _, _>(3_i32), (1, 3_i64));
    }

    #[test]
    fn test_user_defined_coercion() {
        #[derive(Debug, PartialEq)]
        struct Meters(f64);

        impl Coerce<Meters> for u16 {
            fn coerce(self) -> Meters {
                Meters(f64::from(self))
            }
        }

        type L = types![String, Meters];
        assert_eq!(conversion_of::<L, _, _>(12_u16), (1, Meters(12.0)));
    }
}
