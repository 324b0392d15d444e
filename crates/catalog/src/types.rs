//! Core domain types for the movie catalog.
//!
//! This module defines the record types that flow through the normalization
//! pipeline:
//! - RawRecord: one row as delivered by a data source (loosely typed)
//! - CleanRecord: one normalized, scored row
//! - BatchStats / CleanBatch: batch-wide statistics and the final snapshot

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Raw input
// =============================================================================

/// One raw catalog row as delivered by a data source.
///
/// Every field is carried as text: the source columns mix real numbers with
/// human-formatted strings ("12,345", "8.2K", "2h 15m"), and the normalizer
/// owns every conversion. Numeric or null source values are accepted and
/// stringified on the way in, so CSV and JSON sources deserialize into the
/// same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Rating", deserialize_with = "text_or_number")]
    pub rating: String,
    #[serde(rename = "Voting", deserialize_with = "text_or_number")]
    pub voting: String,
    #[serde(rename = "Duration", deserialize_with = "text_or_number")]
    pub duration: String,
}

/// Accept a string, a number, or null, and carry it as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextOrNumber;

    impl serde::de::Visitor<'_> for TextOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a string, a number, or null")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextOrNumber)
}

// =============================================================================
// Normalized output
// =============================================================================

/// One normalized catalog row.
///
/// Created only by [`crate::normalize::normalize`]; never mutated afterwards.
/// Downstream filtering and ranking select and reorder views over these
/// records, they do not touch the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanRecord {
    pub title: String,
    /// Trimmed and lowercased. Variant spellings stay distinct categories
    /// ("sci-fi" vs "sci fi").
    pub genre: String,
    /// Parsed as-is; out-of-range source values pass through unclamped.
    pub rating: f64,
    pub voting: u64,
    /// Minutes. Missing values are imputed with the batch mean.
    pub duration: f64,
    /// rating / 10.
    pub rating_norm: f64,
    /// voting / max voting over the batch.
    pub voting_norm: f64,
    /// 0.5 * rating_norm + 0.5 * voting_norm.
    pub score: f64,
}

/// Batch-wide statistics, computed in the first normalization pass and
/// applied to every record in the second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Arithmetic mean of the durations that parsed.
    pub mean_duration: f64,
    /// Largest voting count in the batch, the score normalization denominator.
    pub max_voting: u64,
}

/// The normalized snapshot: scored, deduplicated records plus the statistics
/// they were normalized with.
///
/// Read-only after construction; share it across consumers behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanBatch {
    records: Vec<CleanRecord>,
    stats: BatchStats,
}

impl CleanBatch {
    pub(crate) fn new(records: Vec<CleanRecord>, stats: BatchStats) -> Self {
        Self { records, stats }
    }

    /// All records, in the dedup output order (descending voting).
    pub fn records(&self) -> &[CleanRecord] {
        &self.records
    }

    /// The statistics the batch was normalized with. Both fields are zero
    /// for a batch normalized from empty input.
    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    /// Number of records after dedup.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
