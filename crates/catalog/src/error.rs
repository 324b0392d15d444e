//! Error types for the catalog crate.

use thiserror::Error;

/// Batch-degenerate conditions surfaced by the normalizer.
///
/// Individual malformed fields never error; each has a documented fallback
/// in [`crate::parse`]. These variants cover the batch-wide cases where a
/// statistic the whole pipeline depends on cannot be computed, which would
/// otherwise leak NaN or infinity into every downstream view.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// No record in the batch had a parseable duration, so there is no mean
    /// to impute the missing values with.
    #[error("no record has a parseable duration; cannot impute the batch mean")]
    AllDurationsMissing,

    /// Every voting count in the batch is zero, so the score denominator
    /// would divide by zero.
    #[error("every voting count in the batch is zero; scores are undefined")]
    AllVotesZero,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, NormalizeError>;
