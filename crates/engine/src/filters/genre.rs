//! Genre membership filter.

use crate::traits::Filter;
use catalog::CleanRecord;
use std::collections::BTreeSet;

/// Keeps rows whose genre is in the selected set.
///
/// `None` means the genre control is inactive and every row passes. An
/// empty set means everything was deselected, so nothing passes.
pub struct GenreFilter {
    allowed: Option<BTreeSet<String>>,
}

impl GenreFilter {
    /// Create a new GenreFilter over normalized (trimmed, lowercase) labels.
    pub fn new(allowed: Option<BTreeSet<String>>) -> Self {
        Self { allowed }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a CleanRecord>) -> Vec<&'a CleanRecord> {
        match &self.allowed {
            None => rows,
            Some(selected) => rows
                .into_iter()
                .filter(|row| selected.contains(&row.genre))
                .collect(),
        }
    }
}
