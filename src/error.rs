//! Errors raised while loading the attempt log and question key

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading input files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading line {line}: not valid UTF-8 text")]
    Decode {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing JSON on line {line}\n  line content: {content}")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid question key {}", path.display())]
    InvalidKey {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Classify an I/O error for `path`, separating the missing-file case
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// Result type for input loading
pub type Result<T> = std::result::Result<T, LoadError>;
