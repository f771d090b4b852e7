//! Retention: reap snapshots beyond the newest `keep`.

use serde::Serialize;
use tokio::fs;

use super::Snapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneOutcome {
    /// Number of snapshot directories removed.
    pub pruned: usize,
    pub removed_ids: Vec<String>,
    pub errors: Vec<String>,
}

/// Delete every snapshot past the first `keep` entries of a newest-first catalog.
///
/// Only whole directories are removed; record content is never looked at. A
/// failed deletion is recorded and the remaining candidates are still processed.
/// Must not run concurrently with a revert over the same catalog.
pub async fn prune(catalog: &[Snapshot], keep: usize) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();

    for snapshot in catalog.iter().skip(keep) {
        match fs::remove_dir_all(&snapshot.dir).await {
            Ok(()) => {
                outcome.pruned += 1;
                outcome.removed_ids.push(snapshot.id.clone());
            }
            Err(e) => {
                tracing::warn!(
                    conversation = %snapshot.id,
                    dir = %snapshot.dir.display(),
                    error = %e,
                    "failed to prune snapshot"
                );
                outcome.errors.push(format!(
                    "Failed to remove {}: {e}",
                    snapshot.dir.display()
                ));
            }
        }
    }

    if outcome.pruned > 0 {
        tracing::info!(pruned = outcome.pruned, keep, "pruned old snapshots");
    }
    outcome
}
