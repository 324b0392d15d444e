//! CSV-backed record source.

use crate::RecordSource;
use crate::error::Result;
use catalog::RawRecord;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Reads raw records from a headered CSV file with the columns
/// `Title,Genre,Rating,Voting,Duration`.
///
/// Every field is carried as text; conversion belongs to the normalizer.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        "CsvSource"
    }

    fn fetch(&self) -> Result<Vec<RawRecord>> {
        let file = File::open(&self.path)?;
        let records = read_csv_records(file)?;
        debug!(
            path = %self.path.display(),
            rows = records.len(),
            "read CSV batch"
        );
        Ok(records)
    }
}

/// Parse headered CSV rows from any reader.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_headered_rows() {
        let data = "\
Title,Genre,Rating,Voting,Duration
Movie A,Action,8.2,\"1,200\",2h 15m
Movie B,Drama,7.0,55K,
";
        let records = read_csv_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Movie A");
        assert_eq!(records[0].voting, "1,200");
        assert_eq!(records[1].voting, "55K");
        assert_eq!(records[1].duration, "");
    }

    #[test]
    fn test_numeric_cells_are_carried_as_text() {
        let data = "\
Title,Genre,Rating,Voting,Duration
Movie A,Action,8.2,1200,135
";
        let records = read_csv_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].rating, "8.2");
        assert_eq!(records[0].voting, "1200");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = CsvSource::new("no/such/file.csv");
        assert!(source.fetch().is_err());
    }
}
