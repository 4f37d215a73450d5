use thiserror::Error;

/// Failed checked access to a `StackVariant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BadVariantAccess {
    /// The variant holds no alternative.
    #[error("variant is empty")]
    Empty,

    /// The variant holds a different alternative than the one requested.
    #[error(
        "variant does not hold the requested type (held index {held}, requested index {requested})"
    )]
    TypeMismatch {
        /// Index of the alternative currently held.
        held: usize,
        /// Index of the alternative that was requested.
        requested: usize,
    },
}
