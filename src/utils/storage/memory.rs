//! In-process content store, used by tests and by embedders that bridge to a remote service themselves.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ArtifactFile, ContentStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryContentStore {
    artifacts: Mutex<HashMap<String, Vec<ArtifactFile>>>,
    read_only: bool,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes are always rejected.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed an artifact's file list.
    pub async fn insert(&self, artifact_id: &str, files: Vec<ArtifactFile>) {
        self.artifacts
            .lock()
            .await
            .insert(artifact_id.to_string(), files);
    }

    /// Snapshot of an artifact's file list; empty when unknown.
    pub async fn files(&self, artifact_id: &str) -> Vec<ArtifactFile> {
        self.artifacts
            .lock()
            .await
            .get(artifact_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get_content(&self, artifact_id: &str) -> Result<Vec<ArtifactFile>, StoreError> {
        Ok(self.files(artifact_id).await)
    }

    async fn set_content(
        &self,
        artifact_id: &str,
        files: Vec<ArtifactFile>,
    ) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Rejected(artifact_id.to_string()));
        }
        self.insert(artifact_id, files).await;
        Ok(())
    }
}
