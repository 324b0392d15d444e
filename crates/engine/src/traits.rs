//! Core trait for row selection.
//!
//! This module defines the Filter trait that allows composable row
//! filters to be applied to a batch snapshot.

use catalog::CleanRecord;

/// A single row-selection stage in the filter pipeline.
///
/// ## Design Note
/// - Filters receive the current selection as borrowed records and return
///   the rows that survive, preserving relative order
/// - They never fail and never touch the records: the batch snapshot stays
///   immutable, selections only narrow
/// - `Send + Sync` lets a compiled pipeline be shared across consumers
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to the current selection.
    fn apply<'a>(&self, rows: Vec<&'a CleanRecord>) -> Vec<&'a CleanRecord>;
}
