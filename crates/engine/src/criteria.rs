//! Declarative filter configuration.

use std::collections::BTreeSet;

/// The four recognized filter options: genre membership plus three inclusive
/// ranges. A row must satisfy all four to pass.
///
/// `genres: None` means no genre constraint; an explicitly empty set is a
/// real selection with nothing in it, so nothing passes. A range with
/// `min > max` can never hold and simply produces an empty result.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub genres: Option<BTreeSet<String>>,
    pub rating: (f64, f64),
    pub voting: (u64, u64),
    pub duration: (f64, f64),
}

impl FilterCriteria {
    /// Fully permissive criteria: every row passes.
    pub fn new() -> Self {
        Self {
            genres: None,
            rating: (f64::NEG_INFINITY, f64::INFINITY),
            voting: (0, u64::MAX),
            duration: (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    /// Restrict to the given genres. Genres are matched against the
    /// normalized form (trimmed, lowercase).
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict ratings to `[min, max]` inclusive.
    pub fn with_rating_range(mut self, min: f64, max: f64) -> Self {
        self.rating = (min, max);
        self
    }

    /// Restrict voting counts to `[min, max]` inclusive.
    pub fn with_voting_range(mut self, min: u64, max: u64) -> Self {
        self.voting = (min, max);
        self
    }

    /// Restrict durations (minutes) to `[min, max]` inclusive.
    pub fn with_duration_range(mut self, min: f64, max: f64) -> Self {
        self.duration = (min, max);
        self
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new()
    }
}
