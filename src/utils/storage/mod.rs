//! Storage trait and implementations for the external content store.
pub mod local;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use local::LocalContentStore;
pub use memory::MemoryContentStore;

/// One named content blob inside an artifact's file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactFile {
    /// Logical name inside the artifact, not a filesystem path.
    pub name: String,
    /// Type tag the store needs on write (e.g. `server_js`, `html`).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// File body.
    #[serde(rename = "source", default)]
    pub content: String,
}

impl ArtifactFile {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            content: content.into(),
        }
    }
}

/// Errors raised by a content store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed artifact content: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backend refused the write.
    #[error("Content store rejected update for artifact '{0}'")]
    Rejected(String),

    /// No backend is able to serve the request.
    #[error("Content store unavailable: {0}")]
    Unavailable(String),
}

/// Content store abstraction interface.
/// Treated as a key-value document store keyed by artifact id, last write wins.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the current file list of an artifact.
    async fn get_content(&self, artifact_id: &str) -> Result<Vec<ArtifactFile>, StoreError>;

    /// Replace the whole file list of an artifact.
    async fn set_content(
        &self,
        artifact_id: &str,
        files: Vec<ArtifactFile>,
    ) -> Result<(), StoreError>;
}
