//! Applies one snapshot: restores modified files, deletes created ones, and
//! removes the snapshot directory once every record went through.

use std::{io, path::Path, sync::Arc};

use serde::Serialize;
use tokio::fs;

use super::{FileRecord, Snapshot, error::BackupError};
use crate::utils::storage::{ArtifactFile, ContentStore, StoreError};

/// Outcome of reverting a single snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevertResult {
    /// True only when every record was applied.
    pub success: bool,
    /// Paths (or artifact names) whose pre-edit content was written back.
    pub reverted: Vec<String>,
    /// Paths (or artifact names) removed because the conversation created them.
    pub deleted: Vec<String>,
    pub errors: Vec<String>,
}

enum Applied {
    Reverted(String),
    Deleted(String),
    /// Nothing to do, e.g. a created file that is already gone.
    Unchanged,
}

/// Reverts resolved snapshots against the filesystem and an optional content store.
#[derive(Clone, Default)]
pub struct RevertEngine {
    store: Option<Arc<dyn ContentStore>>,
}

impl RevertEngine {
    /// An engine without a content store; artifact records fail per record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Arc<dyn ContentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Revert every record of `snapshot`.
    ///
    /// Records are applied in traversal order and independently of each other:
    /// a failing record is reported in `errors` and the rest still run. The
    /// snapshot directory is removed only when no record failed, so a partial
    /// revert stays visible for a retry.
    pub async fn revert_one(&self, snapshot: &Snapshot) -> RevertResult {
        let mut result = RevertResult::default();

        for record in &snapshot.records {
            let applied = match record {
                FileRecord::Filesystem {
                    original_path,
                    backup_path,
                    is_new_file,
                } => revert_file(original_path, backup_path, *is_new_file).await,
                FileRecord::Artifact {
                    backup_path,
                    is_new_file,
                    artifact_id,
                    artifact_kind,
                    name,
                } => {
                    self.revert_artifact(backup_path, artifact_id, artifact_kind, name, *is_new_file)
                        .await
                }
            };
            match applied {
                Ok(Applied::Reverted(label)) => result.reverted.push(label),
                Ok(Applied::Deleted(label)) => result.deleted.push(label),
                Ok(Applied::Unchanged) => {}
                Err(e) => result
                    .errors
                    .push(format!("Failed to revert {}: {e}", record.label())),
            }
        }

        result.success = result.errors.is_empty();
        if result.success {
            match fs::remove_dir_all(&snapshot.dir).await {
                Ok(()) => tracing::info!(
                    conversation = %snapshot.id,
                    reverted = result.reverted.len(),
                    deleted = result.deleted.len(),
                    "conversation reverted"
                ),
                // the revert itself already happened
                Err(e) => tracing::warn!(
                    conversation = %snapshot.id,
                    dir = %snapshot.dir.display(),
                    error = %e,
                    "reverted but failed to remove snapshot directory"
                ),
            }
        } else {
            tracing::warn!(
                conversation = %snapshot.id,
                failures = result.errors.len(),
                "revert incomplete, keeping snapshot"
            );
        }
        result
    }

    async fn revert_artifact(
        &self,
        backup_path: &Path,
        artifact_id: &str,
        artifact_kind: &str,
        name: &str,
        is_new_file: bool,
    ) -> Result<Applied, BackupError> {
        let store = self.store.as_deref().ok_or_else(|| {
            StoreError::Unavailable(format!("no content store configured for '{artifact_id}'"))
        })?;

        if is_new_file {
            let mut files = store.get_content(artifact_id).await?;
            let before = files.len();
            files.retain(|file| file.name != name);
            if files.len() == before {
                tracing::debug!(artifact_id, name, "created artifact file already absent");
                return Ok(Applied::Unchanged);
            }
            store.set_content(artifact_id, files).await?;
            return Ok(Applied::Deleted(name.to_string()));
        }

        let content = fs::read_to_string(backup_path)
            .await
            .map_err(|e| BackupError::io(backup_path, e))?;
        let mut files = store.get_content(artifact_id).await?;
        match files.iter_mut().find(|file| file.name == name) {
            Some(file) => {
                file.content = content;
                file.kind = artifact_kind.to_string();
            }
            None => files.push(ArtifactFile::new(name, artifact_kind, content)),
        }
        store.set_content(artifact_id, files).await?;
        Ok(Applied::Reverted(name.to_string()))
    }
}

async fn revert_file(
    original_path: &Path,
    backup_path: &Path,
    is_new_file: bool,
) -> Result<Applied, BackupError> {
    let label = original_path.display().to_string();

    if is_new_file {
        return match fs::remove_file(original_path).await {
            Ok(()) => Ok(Applied::Deleted(label)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %label, "created file already absent");
                Ok(Applied::Unchanged)
            }
            Err(e) => Err(BackupError::io(original_path, e)),
        };
    }

    let content = fs::read(backup_path)
        .await
        .map_err(|e| BackupError::io(backup_path, e))?;
    if let Some(parent) = original_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| BackupError::io(parent, e))?;
    }
    fs::write(original_path, &content)
        .await
        .map_err(|e| BackupError::io(original_path, e))?;
    Ok(Applied::Reverted(label))
}
