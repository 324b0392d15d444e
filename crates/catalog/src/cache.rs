//! Explicit memoization of normalized batches.
//!
//! Normalization runs once per raw batch; every interactive filter change
//! downstream re-reads the cached snapshot instead of re-running the
//! pipeline. The cache is keyed by a content fingerprint of the raw records
//! and is only ever invalidated manually; there is no ambient caching
//! state anywhere else.

use crate::error::Result;
use crate::normalize::normalize;
use crate::types::{CleanBatch, RawRecord};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Content fingerprint of a raw batch.
///
/// Two batches with identical records (same fields, same order) share a
/// fingerprint; any edit changes it.
pub fn fingerprint(raw: &[RawRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();
    raw.hash(&mut hasher);
    hasher.finish()
}

/// Cache from raw-batch fingerprint to the normalized snapshot.
///
/// Snapshots are handed out as `Arc<CleanBatch>` so concurrent consumers
/// can hold the same read-only batch without copies.
#[derive(Debug, Default)]
pub struct BatchCache {
    entries: HashMap<u64, Arc<CleanBatch>>,
}

impl BatchCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the cached snapshot for `raw`, normalizing on a miss.
    ///
    /// Degenerate batches are not cached: the error propagates and a later
    /// call with the same input retries.
    pub fn get_or_normalize(&mut self, raw: &[RawRecord]) -> Result<Arc<CleanBatch>> {
        let key = fingerprint(raw);
        if let Some(batch) = self.entries.get(&key) {
            debug!(key, "batch cache hit");
            return Ok(Arc::clone(batch));
        }

        debug!(key, rows = raw.len(), "batch cache miss");
        let batch = Arc::new(normalize(raw)?);
        self.entries.insert(key, Arc::clone(&batch));
        Ok(batch)
    }

    /// Drop the cached snapshot for `raw`, if present.
    pub fn invalidate(&mut self, raw: &[RawRecord]) -> bool {
        self.entries.remove(&fingerprint(raw)).is_some()
    }

    /// Drop every cached snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<RawRecord> {
        vec![RawRecord {
            title: "A".to_string(),
            genre: "drama".to_string(),
            rating: "7.0".to_string(),
            voting: "100".to_string(),
            duration: "2h".to_string(),
        }]
    }

    #[test]
    fn test_hit_returns_the_same_snapshot() {
        let raw = sample_batch();
        let mut cache = BatchCache::new();

        let first = cache.get_or_normalize(&raw).unwrap();
        let second = cache.get_or_normalize(&raw).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_different_content_different_entry() {
        let raw = sample_batch();
        let mut edited = sample_batch();
        edited[0].rating = "9.9".to_string();

        let mut cache = BatchCache::new();
        cache.get_or_normalize(&raw).unwrap();
        cache.get_or_normalize(&edited).unwrap();

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_renormalization() {
        let raw = sample_batch();
        let mut cache = BatchCache::new();

        let first = cache.get_or_normalize(&raw).unwrap();
        assert!(cache.invalidate(&raw));
        assert!(cache.is_empty());

        let second = cache.get_or_normalize(&raw).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_degenerate_batch_is_not_cached() {
        let mut raw = sample_batch();
        raw[0].voting = "0".to_string();

        let mut cache = BatchCache::new();
        assert!(cache.get_or_normalize(&raw).is_err());
        assert!(cache.is_empty());
    }
}
