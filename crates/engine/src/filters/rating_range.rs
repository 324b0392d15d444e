//! Rating range filter.

use crate::traits::Filter;
use catalog::CleanRecord;

/// Keeps rows whose rating lies in `[min, max]` inclusive.
///
/// Ratings are not clamped during normalization, so a range like
/// `(0.0, 10.0)` does exclude out-of-range source quirks on purpose.
pub struct RatingRangeFilter {
    min: f64,
    max: f64,
}

impl RatingRangeFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a CleanRecord>) -> Vec<&'a CleanRecord> {
        rows.into_iter()
            .filter(|row| row.rating >= self.min && row.rating <= self.max)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, rating: f64) -> CleanRecord {
        CleanRecord {
            title: title.to_string(),
            genre: "drama".to_string(),
            rating,
            voting: 100,
            duration: 120.0,
            rating_norm: rating / 10.0,
            voting_norm: 1.0,
            score: 0.5,
        }
    }

    #[test]
    fn test_inclusive_bounds() {
        let low = record("Low", 7.0);
        let mid = record("Mid", 8.5);
        let high = record("High", 10.0);
        let out = record("Out", 6.9);

        let filter = RatingRangeFilter::new(7.0, 10.0);
        let kept = filter.apply(vec![&low, &mid, &high, &out]);

        let titles: Vec<&str> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Low", "Mid", "High"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let a = record("A", 8.0);

        let filter = RatingRangeFilter::new(9.0, 7.0);
        assert!(filter.apply(vec![&a]).is_empty());
    }
}
