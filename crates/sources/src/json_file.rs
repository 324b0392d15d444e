//! JSON-backed record source.
//!
//! Accepts the records-oriented shape a dataframe dump produces:
//! `[{"Title": ..., "Genre": ..., "Rating": ..., "Voting": ...,
//! "Duration": ...}, ...]`. Numeric and null values are accepted and
//! carried as text, like every other source.

use crate::RecordSource;
use crate::error::Result;
use catalog::RawRecord;
use std::path::PathBuf;
use tracing::debug;

/// Reads raw records from a records-oriented JSON file.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonSource {
    fn name(&self) -> &str {
        "JsonSource"
    }

    fn fetch(&self) -> Result<Vec<RawRecord>> {
        let text = std::fs::read_to_string(&self.path)?;
        let records = read_json_records(&text)?;
        debug!(
            path = %self.path.display(),
            rows = records.len(),
            "read JSON batch"
        );
        Ok(records)
    }
}

/// Parse a records-oriented JSON array.
pub fn read_json_records(text: &str) -> Result<Vec<RawRecord>> {
    Ok(serde_json::from_str(text)?)
}
