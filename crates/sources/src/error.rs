//! Error types for record sources.

use thiserror::Error;

/// Errors that can occur while reading a raw record batch.
#[derive(Error, Debug)]
pub enum SourceError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV row could not be read or deserialized
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON document could not be parsed into records
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension maps to no known source
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SourceError>;
