//! Two-pass batch normalization.
//!
//! Pass one converts every raw field with the rules in [`crate::parse`] and
//! computes the batch statistics those rules leave open (mean duration, max
//! voting). Pass two applies the statistics: missing durations are imputed
//! and the norms and blended score are computed. Deduplication runs last, on
//! the fully scored records, so the statistics are taken over the pre-dedup
//! batch.

use crate::error::{NormalizeError, Result};
use crate::parse::{normalize_genre, normalize_rating, normalize_voting, parse_duration};
use crate::types::{BatchStats, CleanBatch, CleanRecord, RawRecord};
use std::collections::HashSet;
use tracing::debug;

/// Pass-one output: fields cleaned, duration not yet imputed.
#[derive(Debug, Clone)]
struct ParsedRecord {
    title: String,
    genre: String,
    rating: f64,
    voting: u64,
    duration: Option<f64>,
}

/// Pass one: clean every field of every record.
fn parse_batch(raw: &[RawRecord]) -> Vec<ParsedRecord> {
    raw.iter()
        .map(|r| ParsedRecord {
            title: r.title.clone(),
            genre: normalize_genre(&r.genre),
            rating: normalize_rating(&r.rating),
            voting: normalize_voting(&r.voting),
            duration: parse_duration(&r.duration),
        })
        .collect()
}

/// Compute the batch statistics over pass-one records.
///
/// Errors on the two degenerate batches: no parseable duration anywhere, or
/// a batch-wide maximum voting of zero.
fn batch_stats(parsed: &[ParsedRecord]) -> Result<BatchStats> {
    let defined: Vec<f64> = parsed.iter().filter_map(|p| p.duration).collect();
    if defined.is_empty() {
        return Err(NormalizeError::AllDurationsMissing);
    }
    let mean_duration = defined.iter().sum::<f64>() / defined.len() as f64;

    let max_voting = parsed.iter().map(|p| p.voting).max().unwrap_or(0);
    if max_voting == 0 {
        return Err(NormalizeError::AllVotesZero);
    }

    Ok(BatchStats {
        mean_duration,
        max_voting,
    })
}

/// Pass two: impute missing durations and compute norms and score.
fn finalize(parsed: Vec<ParsedRecord>, stats: &BatchStats) -> Vec<CleanRecord> {
    let denom = stats.max_voting as f64;
    parsed
        .into_iter()
        .map(|p| {
            let duration = p.duration.unwrap_or(stats.mean_duration);
            let rating_norm = p.rating / 10.0;
            let voting_norm = p.voting as f64 / denom;
            CleanRecord {
                title: p.title,
                genre: p.genre,
                rating: p.rating,
                voting: p.voting,
                duration,
                rating_norm,
                voting_norm,
                score: 0.5 * rating_norm + 0.5 * voting_norm,
            }
        })
        .collect()
}

/// Keep one record per title.
///
/// Stable-sorts by descending voting and keeps the first occurrence of each
/// title, so the survivor is the duplicate with the most votes (original
/// relative order breaks ties). The output stays in the sorted order.
pub fn deduplicate(mut records: Vec<CleanRecord>) -> Vec<CleanRecord> {
    records.sort_by(|a, b| b.voting.cmp(&a.voting));
    let mut seen = HashSet::new();
    records.retain(|r| seen.insert(r.title.clone()));
    records
}

/// Normalize a raw batch into a scored, deduplicated [`CleanBatch`].
///
/// An empty input yields an empty batch: with zero rows there is nothing a
/// batch statistic could corrupt. A non-empty batch with no parseable
/// duration or an all-zero voting column is a degenerate configuration and
/// errors instead of spreading NaN through every downstream view.
pub fn normalize(raw: &[RawRecord]) -> Result<CleanBatch> {
    if raw.is_empty() {
        return Ok(CleanBatch::new(
            Vec::new(),
            BatchStats {
                mean_duration: 0.0,
                max_voting: 0,
            },
        ));
    }

    let parsed = parse_batch(raw);
    let stats = batch_stats(&parsed)?;
    let records = deduplicate(finalize(parsed, &stats));

    debug!(
        raw = raw.len(),
        kept = records.len(),
        mean_duration = stats.mean_duration,
        max_voting = stats.max_voting,
        "normalized batch"
    );

    Ok(CleanBatch::new(records, stats))
}
