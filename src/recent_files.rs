//! Recent files list
//!
//! Records every path opened during the session, oldest first. Re-opening a
//! path appends it again; the list has no capacity limit.

use std::path::{Path, PathBuf};

/// Append-only history of opened files
#[derive(Debug, Clone, Default)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
}

impl RecentFiles {
    /// Record that `path` was opened
    pub fn add(&mut self, path: PathBuf) {
        tracing::trace!(path = %path.display(), "recorded recent file");
        self.entries.push(path);
    }

    /// Entries in the order they were opened
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// The most recently opened path
    pub fn latest(&self) -> Option<&Path> {
        self.entries.last().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
