//! Error types for the engine crate.

use thiserror::Error;

/// Errors the filter/rank engine reports to its caller.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A query that needs at least one row was given an empty selection.
    /// Presentation decides how to render this ("no movies match").
    #[error("no rows match the current selection")]
    EmptySubset,

    /// Serializing the delimited-text export failed.
    #[error("export failed: {0}")]
    Export(#[from] csv::Error),

    /// Writing the export to its destination failed.
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
