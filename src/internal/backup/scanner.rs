//! Snapshot discovery across one or more backup roots.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};

use super::{
    Snapshot,
    error::{BackupError, BackupResult},
    layout, walker,
};

/// Catalog plus the discovery problems met while building it.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Newest first.
    pub snapshots: Vec<Snapshot>,
    pub warnings: Vec<String>,
}

/// Build the newest-first catalog from `roots`, searched in order.
///
/// Missing roots are skipped silently; unreadable roots and snapshots that
/// cannot be timestamped or walked are skipped with a warning. When the same
/// conversation id shows up under more than one root, the first one found wins.
pub fn list_snapshots(roots: &[PathBuf], project_root: &Path) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut seen: HashSet<String> = HashSet::new();

    for root in roots {
        if !root.exists() {
            tracing::debug!(root = %root.display(), "backup root does not exist");
            continue;
        }
        let candidates = match candidate_dirs(root, &mut outcome.warnings) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "skipping unreadable backup root");
                outcome.warnings.push(e.to_string());
                continue;
            }
        };

        for (dir, id) in candidates {
            if seen.contains(&id) {
                tracing::warn!(
                    conversation = %id,
                    dir = %dir.display(),
                    "ignoring duplicate snapshot found in a later root"
                );
                continue;
            }
            match load_snapshot(&dir, &id, project_root) {
                Ok(snapshot) => {
                    seen.insert(id);
                    outcome.snapshots.push(snapshot);
                }
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable snapshot");
                    outcome
                        .warnings
                        .push(format!("{}: {e}", dir.display()));
                }
            }
        }
    }

    sort_newest_first(&mut outcome.snapshots);
    outcome
}

/// Newest first; equal timestamps fall back to directory name.
pub fn sort_newest_first(snapshots: &mut [Snapshot]) {
    snapshots.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.dir_name().cmp(&b.dir_name()))
    });
}

/// Immediate subdirectories of `root` named `conversation-<id>-backup`, sorted by path.
fn candidate_dirs(
    root: &Path,
    warnings: &mut Vec<String>,
) -> BackupResult<Vec<(PathBuf, String)>> {
    let entries = fs::read_dir(root).map_err(|e| BackupError::io(root, e))?;
    Ok(collect_candidates(
        root,
        entries.map(|entry| entry.map(|entry| entry.path())),
        warnings,
    ))
}

/// An entry that cannot be read is reported and skipped; the rest of the root still counts.
fn collect_candidates(
    root: &Path,
    entries: impl Iterator<Item = io::Result<PathBuf>>,
    warnings: &mut Vec<String>,
) -> Vec<(PathBuf, String)> {
    let mut candidates = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                let err = BackupError::io(root, e);
                tracing::warn!(
                    root = %root.display(),
                    error = %err,
                    "skipping unreadable backup root entry"
                );
                warnings.push(err.to_string());
                continue;
            }
        };
        if !path.is_dir() {
            continue;
        }
        let Some(id) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(layout::parse_snapshot_dir_name)
        else {
            continue;
        };
        let id = id.to_string();
        candidates.push((path, id));
    }
    candidates.sort();
    candidates
}

fn load_snapshot(dir: &Path, id: &str, project_root: &Path) -> BackupResult<Snapshot> {
    let created_at = creation_time(dir)?;
    let records = walker::walk_snapshot(dir, project_root)?;
    Ok(Snapshot {
        id: id.to_string(),
        dir: dir.to_path_buf(),
        created_at,
        records,
    })
}

/// Birth time where the filesystem records one, modification time otherwise.
fn creation_time(dir: &Path) -> BackupResult<DateTime<Utc>> {
    let metadata = fs::metadata(dir).map_err(|e| BackupError::io(dir, e))?;
    let time = metadata
        .created()
        .or_else(|_| metadata.modified())
        .map_err(|e| BackupError::io(dir, e))?;
    Ok(DateTime::<Utc>::from(time))
}
