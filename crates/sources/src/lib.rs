//! # Sources Crate
//!
//! Data-source collaborators that deliver raw catalog rows.
//!
//! ## Components
//!
//! ### CsvSource
//! Headered CSV file with the columns `Title,Genre,Rating,Voting,Duration`.
//!
//! ### JsonSource
//! Records-oriented JSON array with the same keys (the shape a dataframe
//! dump produces).
//!
//! ### FixtureSource
//! In-memory rows for tests and demos.
//!
//! Every source yields the same `Vec<RawRecord>`; the normalizer neither
//! knows nor cares where rows came from. Reading happens once per pipeline
//! invocation; there are no incremental updates.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CsvSource, RecordSource};
//!
//! let source = CsvSource::new("data/movies.csv");
//! let raw = source.fetch()?;
//! ```

// Public modules
pub mod csv_file;
pub mod error;
pub mod fixture;
pub mod json_file;

// Re-export commonly used types
pub use csv_file::CsvSource;
pub use error::{Result, SourceError};
pub use fixture::FixtureSource;
pub use json_file::JsonSource;

use catalog::RawRecord;
use std::path::Path;

/// A collaborator that can produce one raw record batch.
pub trait RecordSource {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Read the full batch.
    fn fetch(&self) -> Result<Vec<RawRecord>>;
}

/// Open a record file, dispatching on the extension.
pub fn load_path(path: &Path) -> Result<Vec<RawRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => CsvSource::new(path).fetch(),
        "json" => JsonSource::new(path).fetch(),
        other => Err(SourceError::UnsupportedExtension(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path_rejects_unknown_extension() {
        let result = load_path(Path::new("movies.parquet"));
        assert!(matches!(
            result,
            Err(SourceError::UnsupportedExtension(ext)) if ext == "parquet"
        ));
    }
}
