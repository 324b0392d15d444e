//! # Catalog Crate
//!
//! This crate owns the transformation from raw movie rows to the normalized,
//! scored, deduplicated snapshot that every other component reads. It loads
//! nothing and renders nothing: sources deliver [`RawRecord`]s, consumers
//! get a read-only [`CleanBatch`].
//!
//! ## Main Components
//!
//! - **types**: RawRecord, CleanRecord, BatchStats, CleanBatch
//! - **parse**: field-level normalization rules (voting, rating, duration, genre)
//! - **normalize**: the two-pass batch pipeline plus dedup
//! - **cache**: explicit memoization of normalized batches
//! - **error**: batch-degenerate error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::BatchCache;
//!
//! let mut cache = BatchCache::new();
//!
//! // Normalized once; later calls with the same rows hit the cache.
//! let batch = cache.get_or_normalize(&rows)?;
//! println!("{} movies after dedup", batch.len());
//! ```

// Public modules
pub mod cache;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod types;

// Re-export commonly used items for convenience
pub use cache::{BatchCache, fingerprint};
pub use error::{NormalizeError, Result};
pub use normalize::{deduplicate, normalize};
pub use parse::{normalize_genre, normalize_rating, normalize_voting, parse_duration};
pub use types::{BatchStats, CleanBatch, CleanRecord, RawRecord};
