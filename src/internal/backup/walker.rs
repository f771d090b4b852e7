//! Classifies the files of one snapshot directory into [`FileRecord`]s.

use std::path::Path;

use walkdir::WalkDir;

use super::{
    FileRecord,
    error::{BackupError, BackupResult},
    layout::{self, ArtifactMeta},
};

/// Walk `dir` recursively and build its record list.
///
/// Traversal is sorted by file name, so the result is stable for a given
/// filesystem state. `.meta` companions and the top-level index file are never
/// emitted. An artifact file whose companion is missing or corrupt is skipped
/// with a warning; only a failure to traverse the directory fails the walk.
pub fn walk_snapshot(dir: &Path, project_root: &Path) -> BackupResult<Vec<FileRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if layout::is_companion(file_name) {
            continue;
        }
        if entry.depth() == 1 && file_name == layout::SNAPSHOT_INDEX_FILE {
            continue;
        }

        if layout::is_artifact(file_name) {
            match read_artifact_meta(entry.path()) {
                Ok(meta) => records.push(FileRecord::Artifact {
                    backup_path: entry.path().to_path_buf(),
                    is_new_file: meta.is_new_file,
                    artifact_id: meta.artifact_id,
                    artifact_kind: meta.artifact_kind,
                    name: meta.name,
                }),
                Err(e) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "skipping artifact backup without readable metadata"
                    );
                }
            }
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let (target, is_new_file) = match layout::strip_new_file_marker(relative) {
            Some(target) => (target, true),
            None => (relative.to_path_buf(), false),
        };
        records.push(FileRecord::Filesystem {
            original_path: project_root.join(target),
            backup_path: entry.path().to_path_buf(),
            is_new_file,
        });
    }

    Ok(records)
}

fn read_artifact_meta(data_path: &Path) -> BackupResult<ArtifactMeta> {
    let meta_path = layout::companion_path(data_path);
    let raw = std::fs::read_to_string(&meta_path).map_err(|e| BackupError::io(&meta_path, e))?;
    serde_json::from_str(&raw).map_err(|source| BackupError::Metadata {
        path: meta_path,
        source,
    })
}
