use std::path::PathBuf;

use thiserror::Error;

/// Every variant is fatal for a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Malformed gene label {token:?} at {}:{line}", .path.display())]
    MalformedLabel {
        token: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    UnwritableOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot decode tab-separated file {}: {source}", .path.display())]
    Tabular {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MergeError {
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::UnreadableFile { path: path.into(), source }
    }

    pub fn unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::UnwritableOutput { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
