//! Delimited-text export of a filtered selection.
//!
//! A downstream export collaborator writes these bytes wherever it wants;
//! this module only owns the columns and the serialization.

use crate::error::EngineError;
use catalog::CleanRecord;
use std::io::Write;

/// Export column header, in order.
pub const EXPORT_COLUMNS: [&str; 4] = ["Title", "Genre", "Rating", "Voting"];

/// Write the selection as headered CSV.
pub fn write_csv<W: Write>(rows: &[&CleanRecord], writer: W) -> Result<(), EngineError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(EXPORT_COLUMNS)?;
    for row in rows {
        let rating = row.rating.to_string();
        let voting = row.voting.to_string();
        out.write_record([
            row.title.as_str(),
            row.genre.as_str(),
            rating.as_str(),
            voting.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Render the selection as a CSV string.
pub fn to_csv_string(rows: &[&CleanRecord]) -> Result<String, EngineError> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genre: &str, rating: f64, voting: u64) -> CleanRecord {
        CleanRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            rating,
            voting,
            duration: 120.0,
            rating_norm: rating / 10.0,
            voting_norm: 0.5,
            score: 0.6,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let a = record("Movie A", "action", 8.1, 1200);
        let b = record("Movie B", "drama", 7.0, 300);

        let csv = to_csv_string(&[&a, &b]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Title,Genre,Rating,Voting");
        assert_eq!(lines[1], "Movie A,action,8.1,1200");
        assert_eq!(lines[2], "Movie B,drama,7,300");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let a = record("Movie, The", "action", 8.0, 100);

        let csv = to_csv_string(&[&a]).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("\"Movie, The\""));
    }

    #[test]
    fn test_empty_selection_is_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Title,Genre,Rating,Voting");
    }
}
