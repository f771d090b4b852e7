//! Local filesystem content store.
//! Each artifact is one `<artifact_id>.json` document under the base directory holding `{"files": [...]}`.
//! A missing document reads as an empty file list, and writes go through a sibling temp file plus rename.
use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::{ArtifactFile, ContentStore, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ArtifactDocument {
    #[serde(default)]
    files: Vec<ArtifactFile>,
}

/// Local filesystem content store backend
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    base_path: PathBuf,
}

impl LocalContentStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Document path for an artifact id; ids that could escape the base directory are refused.
    fn document_path(&self, artifact_id: &str) -> Result<PathBuf, StoreError> {
        let invalid = artifact_id.is_empty()
            || artifact_id == "."
            || artifact_id == ".."
            || artifact_id.contains(&['/', '\\'][..]);
        if invalid {
            return Err(StoreError::Unavailable(format!(
                "invalid artifact id '{artifact_id}'"
            )));
        }
        Ok(self.base_path.join(format!("{artifact_id}.json")))
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn get_content(&self, artifact_id: &str) -> Result<Vec<ArtifactFile>, StoreError> {
        let path = self.document_path(artifact_id)?;
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let document: ArtifactDocument = serde_json::from_str(&raw)?;
        Ok(document.files)
    }

    async fn set_content(
        &self,
        artifact_id: &str,
        files: Vec<ArtifactFile>,
    ) -> Result<(), StoreError> {
        let path = self.document_path(artifact_id)?;
        fs::create_dir_all(&self.base_path).await?;
        let json = serde_json::to_string_pretty(&ArtifactDocument { files })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await?;
        tracing::debug!(artifact_id, path = %path.display(), "artifact content written");
        Ok(())
    }
}
