//! Ranking and extremes over a filtered selection.

use crate::error::EngineError;
use catalog::CleanRecord;

/// Numeric field a ranking or aggregation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Rating,
    Voting,
    Duration,
    Score,
}

impl NumericField {
    /// Value of this field for one record.
    pub fn of(self, record: &CleanRecord) -> f64 {
        match self {
            NumericField::Rating => record.rating,
            NumericField::Voting => record.voting as f64,
            NumericField::Duration => record.duration,
            NumericField::Score => record.score,
        }
    }
}

/// Direction of an extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

/// First `n` rows by descending score.
///
/// The sort is stable, so rows with equal scores keep their selection
/// order. Returns fewer than `n` rows when the selection is smaller.
pub fn top_n<'a>(rows: &[&'a CleanRecord], n: usize) -> Vec<&'a CleanRecord> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked
}

/// The records at the minimum and maximum of `field`.
///
/// Ties go to the first occurrence. An empty selection is reported as
/// [`EngineError::EmptySubset`] so the presentation layer can render a
/// "no data" state instead of crashing.
pub fn extremes<'a>(
    rows: &[&'a CleanRecord],
    field: NumericField,
) -> Result<(&'a CleanRecord, &'a CleanRecord), EngineError> {
    let first = *rows.first().ok_or(EngineError::EmptySubset)?;
    let mut min = first;
    let mut max = first;
    for &row in &rows[1..] {
        if field.of(row) < field.of(min) {
            min = row;
        }
        if field.of(row) > field.of(max) {
            max = row;
        }
    }
    Ok((min, max))
}
