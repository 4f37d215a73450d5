//! `proptest` strategies producing variants.
//!
//! Enabled by the `proptest` feature. Combine `holding` with `prop_oneof!` to
//! generate variants over every alternative:
//!
//! ```rust
//! use proptest::prelude::*;
//! use stack_variant::{strategy::holding, types, StackVariant};
//!
//! type Alternatives = types![i32, String];
//!
//! fn any_value() -> impl Strategy<Value = StackVariant<Alternatives>> {
//!     prop_oneof![
//!         holding::<Alternatives, _, _, _>(any::<i32>()),
//!         holding::<Alternatives, _, _, _>(".*"),
//!     ]
//! }
//! ```

use proptest::strategy::Strategy;

use crate::list::{Member, NonEmpty};
use crate::variant::StackVariant;

/// Maps a strategy of alternative values to a strategy of variants holding them.
pub fn holding<L, T, I, S>(values: S) -> impl Strategy<Value = StackVariant<L>>
where
    L: NonEmpty + Member<T, I>,
    S: Strategy<Value = T>,
{
    values.prop_map(StackVariant::with)
}
