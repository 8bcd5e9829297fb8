use thiserror::Error;

/// Failures shared by the codec, counter and iterator APIs.
///
/// Every operation in this crate is pure and deterministic: a call either
/// succeeds or reports one of these immediately. There is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// A character that is not part of the alphabet was encountered.
    #[error("character {0:?} does not belong to the alphabet")]
    InvalidSymbol(char),

    /// A label must contain at least one symbol.
    #[error("label must not be empty")]
    EmptyLabel,

    /// The value does not fit in the requested number of symbols.
    #[error("value {value} does not fit in the requested width (max {max})")]
    OutOfRange { value: u64, max: u64 },

    /// A label or an arithmetic result exceeds the 64-bit integer range.
    #[error("value exceeds the 64-bit integer range")]
    Overflow,

    /// Subtraction went below zero; negative values have no label.
    #[error("result would be negative")]
    Negative,

    /// Division or remainder by a zero-valued counter.
    #[error("division by zero")]
    DivisionByZero,

    /// Labels built over different alphabets were compared or combined.
    #[error("alphabets differ: {left:?} vs {right:?}")]
    AlphabetMismatch { left: String, right: String },

    /// The symbol string handed to `Alphabet::new` was rejected.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Iterator stride must be at least one.
    #[error("stride must be at least 1")]
    ZeroStride,
}
