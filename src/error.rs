//! Error taxonomy for editor operations
//!
//! Every error aborts only the operation that raised it. The update layer turns
//! them into a status line and a user notification; nothing is retried.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while operating on documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Reading or writing a file failed
    Io {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },
    /// The file is already bound to an open tab
    AlreadyOpen(PathBuf),
    /// The operation needs a selected tab but none are open
    NoActiveTab,
    /// Search or replace was requested with an empty pattern
    InvalidQuery,
}

impl EditorError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: &Path, err: &io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, kind, message } => match kind {
                io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                _ => format!("Error accessing {}: {}", path.display(), message),
            },
            Self::AlreadyOpen(path) => format!("File is already open: {}", path.display()),
            Self::NoActiveTab => "No document is open".to_string(),
            Self::InvalidQuery => "Search text must not be empty".to_string(),
        }
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message, .. } => write!(f, "{}: {}", path.display(), message),
            Self::AlreadyOpen(path) => write!(f, "already open: {}", path.display()),
            Self::NoActiveTab => write!(f, "no active tab"),
            Self::InvalidQuery => write!(f, "empty search pattern"),
        }
    }
}

impl std::error::Error for EditorError {}
