//! Error types for the edges of the pipeline
//!
//! Parsing and rendering never fail; errors only come from loading themes,
//! reading or writing preferences, and file I/O in the command-line tool.

use std::path::PathBuf;

use thiserror::Error;

use crate::preferences::PreferencesError;
use crate::theme::ThemeError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("preferences error: {0}")]
    Preferences(#[from] PreferencesError),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a read error for a file path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for a file path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
