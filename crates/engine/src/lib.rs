//! Filtering, ranking, and aggregation over a normalized movie batch.
//!
//! This crate provides:
//! - FilterCriteria and the Filter trait implementations for row selection
//! - FilterPipeline for composing filters
//! - top-N ranking, grouped aggregation, and extremes
//! - delimited-text export of a filtered selection
//!
//! ## Architecture
//! Views are computed in stages over an immutable [`catalog::CleanBatch`]:
//! 1. Filters select rows (genre membership plus three inclusive ranges)
//! 2. Ranking and aggregation order or summarize the selected rows
//! 3. Export serializes the selection for a downstream writer
//!
//! The engine holds no state of its own: every view is a pure function of
//! the batch snapshot and the criteria, so a control change downstream is
//! just a re-run against the cached batch.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{FilterCriteria, apply_filters, top_n};
//!
//! let criteria = FilterCriteria::new()
//!     .with_rating_range(7.0, 10.0)
//!     .with_voting_range(1_000, u64::MAX);
//!
//! let rows = apply_filters(&batch, &criteria);
//! let best = top_n(&rows, 10);
//! ```

pub mod aggregate;
pub mod criteria;
pub mod error;
pub mod export;
pub mod filter_pipeline;
pub mod filters;
pub mod rank;
pub mod traits;

// Re-export main types
pub use aggregate::{Aggregate, group_aggregate, group_count, group_extreme};
pub use criteria::FilterCriteria;
pub use error::EngineError;
pub use export::{EXPORT_COLUMNS, to_csv_string, write_csv};
pub use filter_pipeline::{FilterPipeline, apply_filters};
pub use rank::{Extreme, NumericField, extremes, top_n};
pub use traits::Filter;
