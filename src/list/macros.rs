/// Spells a type list.
///
/// `types![A, B, C]` expands to `Cons<A, Cons<B, Cons<C, Nil>>>`.
///
/// # Example
///
/// ```rust
/// use stack_variant::{types, Cons, Nil};
///
/// type Numbers = types![u8, u16, u32];
/// let _: core::marker::PhantomData<Numbers> =
///     core::marker::PhantomData::<Cons<u8, Cons<u16, Cons<u32, Nil>>>>;
/// ```
///
/// Reference alternatives carry their lifetime:
///
/// ```rust
/// use stack_variant::{types, StackVariant};
///
/// fn borrow<'a>(value: &'a u64) -> StackVariant<types![&'a u64, u8]> {
///     StackVariant::with(value)
/// }
/// ```
#[macro_export]
macro_rules! types {
    () => {
        $crate::list::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::types![$($tail),*]>
    };
}
