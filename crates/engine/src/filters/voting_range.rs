//! Voting count range filter.

use crate::traits::Filter;
use catalog::CleanRecord;

/// Keeps rows whose voting count lies in `[min, max]` inclusive.
pub struct VotingRangeFilter {
    min: u64,
    max: u64,
}

impl VotingRangeFilter {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

impl Filter for VotingRangeFilter {
    fn name(&self) -> &str {
        "VotingRangeFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a CleanRecord>) -> Vec<&'a CleanRecord> {
        rows.into_iter()
            .filter(|row| row.voting >= self.min && row.voting <= self.max)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, voting: u64) -> CleanRecord {
        CleanRecord {
            title: title.to_string(),
            genre: "drama".to_string(),
            rating: 7.0,
            voting,
            duration: 120.0,
            rating_norm: 0.7,
            voting_norm: 0.5,
            score: 0.6,
        }
    }

    #[test]
    fn test_inclusive_bounds() {
        let a = record("A", 1_000);
        let b = record("B", 999);
        let c = record("C", 50_000);

        let filter = VotingRangeFilter::new(1_000, 50_000);
        let kept = filter.apply(vec![&a, &b, &c]);

        let titles: Vec<&str> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }
}
