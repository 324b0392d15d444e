//! Filter implementations for the row-selection pipeline.
//!
//! One file per filter, mirroring the four options of
//! [`crate::criteria::FilterCriteria`].

pub mod duration_range;
pub mod genre;
pub mod rating_range;
pub mod voting_range;

// Re-export for convenience
pub use duration_range::DurationRangeFilter;
pub use genre::GenreFilter;
pub use rating_range::RatingRangeFilter;
pub use voting_range::VotingRangeFilter;
