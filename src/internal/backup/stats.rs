//! Read-only summary of a catalog.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FileRecord, Snapshot};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackupStats {
    pub snapshot_count: usize,
    pub total_files: usize,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
    /// Bytes of filesystem backup content; artifact records are not sized.
    pub total_bytes: u64,
}

pub fn collect_stats(catalog: &[Snapshot]) -> BackupStats {
    let mut stats = BackupStats {
        snapshot_count: catalog.len(),
        oldest: catalog.iter().map(|s| s.created_at).min(),
        newest: catalog.iter().map(|s| s.created_at).max(),
        ..BackupStats::default()
    };

    for record in catalog.iter().flat_map(|s| &s.records) {
        stats.total_files += 1;
        if let FileRecord::Filesystem { backup_path, .. } = record {
            match std::fs::metadata(backup_path) {
                Ok(metadata) => stats.total_bytes += metadata.len(),
                Err(e) => {
                    tracing::debug!(path = %backup_path.display(), error = %e, "cannot stat backup file");
                }
            }
        }
    }

    stats
}
