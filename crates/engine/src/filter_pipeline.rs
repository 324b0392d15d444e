//! The FilterPipeline composes row filters.
//!
//! This module provides the FilterPipeline struct that chains multiple
//! filters using the builder pattern, and the [`apply_filters`] entry point
//! that compiles a [`FilterCriteria`] into a pipeline and runs it.

use crate::criteria::FilterCriteria;
use crate::filters::{DurationRangeFilter, GenreFilter, RatingRangeFilter, VotingRangeFilter};
use crate::traits::Filter;
use catalog::{CleanBatch, CleanRecord};
use tracing::debug;

/// Chains filters and applies them in sequence over a batch snapshot.
///
/// ## Usage
/// ```ignore
/// let rows = FilterPipeline::from_criteria(&criteria).apply(&batch);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Compile the four criteria options into a pipeline.
    ///
    /// All four filters are always present; an inactive control is simply a
    /// filter that passes everything. Conjunction falls out of sequencing.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self::new()
            .add_filter(GenreFilter::new(criteria.genres.clone()))
            .add_filter(RatingRangeFilter::new(criteria.rating.0, criteria.rating.1))
            .add_filter(VotingRangeFilter::new(criteria.voting.0, criteria.voting.1))
            .add_filter(DurationRangeFilter::new(
                criteria.duration.0,
                criteria.duration.1,
            ))
    }

    /// Apply all filters in sequence, preserving the batch's record order.
    pub fn apply<'a>(&self, batch: &'a CleanBatch) -> Vec<&'a CleanRecord> {
        let mut current: Vec<&CleanRecord> = batch.records().iter().collect();
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current);
            debug!(
                "Filter applied: {} ({} -> {} rows)",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Select the rows of `batch` that satisfy every option of `criteria`.
pub fn apply_filters<'a>(batch: &'a CleanBatch, criteria: &FilterCriteria) -> Vec<&'a CleanRecord> {
    FilterPipeline::from_criteria(criteria).apply(batch)
}
