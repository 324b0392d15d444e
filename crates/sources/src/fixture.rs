//! In-memory record source for tests and demos.

use crate::RecordSource;
use crate::error::Result;
use catalog::RawRecord;

/// Serves a fixed batch of records from memory.
pub struct FixtureSource {
    records: Vec<RawRecord>,
}

impl FixtureSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for FixtureSource {
    fn name(&self) -> &str {
        "FixtureSource"
    }

    fn fetch(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_the_fixture() {
        let record = RawRecord {
            title: "Movie A".to_string(),
            genre: "Action".to_string(),
            rating: "8.0".to_string(),
            voting: "100".to_string(),
            duration: "2h".to_string(),
        };
        let source = FixtureSource::new(vec![record.clone()]);

        let fetched = source.fetch().unwrap();
        assert_eq!(fetched, vec![record]);
    }
}
