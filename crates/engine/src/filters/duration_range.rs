//! Duration range filter.

use crate::traits::Filter;
use catalog::CleanRecord;

/// Keeps rows whose duration (minutes) lies in `[min, max]` inclusive.
///
/// Imputed durations take part like any other value: after normalization a
/// record's duration is just a number.
pub struct DurationRangeFilter {
    min: f64,
    max: f64,
}

impl DurationRangeFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Filter for DurationRangeFilter {
    fn name(&self) -> &str {
        "DurationRangeFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a CleanRecord>) -> Vec<&'a CleanRecord> {
        rows.into_iter()
            .filter(|row| row.duration >= self.min && row.duration <= self.max)
            .collect()
    }
}
