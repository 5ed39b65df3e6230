//! Error types for the Gini calculator

use thiserror::Error;

/// Errors returned by [`crate::gini`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GiniError {
    #[error("Cannot compute Gini coefficient of an empty sequence")]
    EmptyInput,

    #[error("Sequence is not non-decreasing at index {index}: {value} < {previous}")]
    NotNonDecreasing {
        index: usize,
        previous: u64,
        value: u64,
    },

    #[error("Cannot compute Gini coefficient: all {len} values are zero")]
    ZeroTotal { len: usize },
}
