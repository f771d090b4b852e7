//! Conversation-scoped backups: discovery, revert, cumulative revert and retention.
//!
//! A [`Snapshot`] is the set of pre-edit captures one conversation left behind.
//! Snapshots are discovered by [`scanner::list_snapshots`], applied by
//! [`engine::RevertEngine`], chained newest-first by [`cumulative::revert_to`]
//! and reaped by [`retention::prune`]. [`manager::BackupManager`] binds them to
//! a project.
//!
//! ## Usage
//!
//! ```no_run
//! use rewind::internal::backup::BackupManager;
//!
//! # async fn run() -> Result<(), rewind::internal::backup::BackupError> {
//! let manager = BackupManager::new("/path/to/project", vec!["/path/to/project/.rewind/backups".into()]);
//! let result = manager.revert_one("1712-abc").await?;
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```

pub mod cumulative;
pub mod engine;
pub mod error;
pub mod layout;
pub mod manager;
pub mod retention;
pub mod scanner;
pub mod stats;
pub mod walker;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use cumulative::{FailurePolicy, RevertSummary, revert_to};
pub use engine::{RevertEngine, RevertResult};
pub use error::{BackupError, BackupResult};
pub use manager::BackupManager;
pub use retention::{PruneOutcome, prune};
pub use scanner::{ScanOutcome, list_snapshots};
pub use stats::{BackupStats, collect_stats};
pub use walker::walk_snapshot;

/// Opaque conversation identifier.
pub type ConversationId = String;

/// One captured file or artifact within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileRecord {
    /// A file in the project tree.
    Filesystem {
        /// Absolute path the revert writes to or deletes.
        original_path: PathBuf,
        /// Captured pre-edit content.
        backup_path: PathBuf,
        is_new_file: bool,
    },
    /// A named file inside an external content store artifact.
    Artifact {
        backup_path: PathBuf,
        is_new_file: bool,
        artifact_id: String,
        artifact_kind: String,
        name: String,
    },
}

impl FileRecord {
    /// True when the conversation created the target, so revert deletes it.
    pub fn is_new_file(&self) -> bool {
        match self {
            FileRecord::Filesystem { is_new_file, .. } | FileRecord::Artifact { is_new_file, .. } => {
                *is_new_file
            }
        }
    }

    pub fn backup_path(&self) -> &Path {
        match self {
            FileRecord::Filesystem { backup_path, .. } | FileRecord::Artifact { backup_path, .. } => {
                backup_path.as_path()
            }
        }
    }

    /// Path or artifact name used in reports and error messages.
    pub fn label(&self) -> String {
        match self {
            FileRecord::Filesystem { original_path, .. } => original_path.display().to_string(),
            FileRecord::Artifact {
                artifact_id, name, ..
            } => format!("{artifact_id}:{name}"),
        }
    }
}

/// Pre-edit captures of a single conversation, stored under one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub id: ConversationId,
    /// The `conversation-<id>-backup` directory.
    pub dir: PathBuf,
    /// Sort key; newer snapshots come first in a catalog.
    pub created_at: DateTime<Utc>,
    /// Records in directory-traversal order.
    pub records: Vec<FileRecord>,
}

impl Snapshot {
    pub fn dir_name(&self) -> Option<&str> {
        self.dir.file_name().and_then(|name| name.to_str())
    }
}
