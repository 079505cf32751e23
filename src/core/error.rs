// error.rs - Typed errors raised by the distance engine

use thiserror::Error;

/// Errors raised while building a collection or a distance matrix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// Hamming distance requires both sequences to have the same length
    #[error("sequence length mismatch: '{first}' has {first_len} bases, '{second}' has {second_len} (Hamming distance requires equal lengths)")]
    LengthMismatch {
        first: String,
        second: String,
        first_len: usize,
        second_len: usize,
    },

    /// Two bare sequences of different length were compared position by position
    #[error("sequence length mismatch: {first_len} vs {second_len} bases (Hamming distance requires equal lengths)")]
    UnequalLengths { first_len: usize, second_len: usize },

    /// Identifiers must be unique within a collection
    #[error("duplicate sequence identifier: '{0}'")]
    DuplicateId(String),
}

impl From<DistanceError> for String {
    fn from(e: DistanceError) -> Self {
        e.to_string()
    }
}
