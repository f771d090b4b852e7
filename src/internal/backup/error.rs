//! Error types for backup discovery and revert operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::storage::StoreError;

#[derive(Debug, Error)]
pub enum BackupError {
    /// IO error on a specific path.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while traversing a snapshot directory.
    #[error("Failed to walk snapshot: {0}")]
    Walk(#[from] walkdir::Error),

    /// Companion metadata exists but is not valid.
    #[error("Malformed metadata {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No snapshot with this conversation id was discovered.
    #[error("No backup found for conversation '{0}'")]
    SnapshotNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackupError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type BackupResult<T> = Result<T, BackupError>;
