//! Project-scoped facade over discovery, revert, retention and statistics.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{
    cumulative::{self, FailurePolicy, RevertSummary},
    engine::{RevertEngine, RevertResult},
    error::{BackupError, BackupResult},
    retention::{self, PruneOutcome},
    scanner::{self, ScanOutcome},
    stats::{self, BackupStats},
};
use crate::{
    internal::config::{self, RewindConfig},
    utils::{
        path,
        storage::{ContentStore, LocalContentStore},
    },
};

/// Entry point for callers that want to undo conversations in one project.
///
/// Every call rescans the roots, so the catalog always reflects the disk.
/// Reverts and prunes against the same roots must not run concurrently.
#[derive(Clone)]
pub struct BackupManager {
    project_root: PathBuf,
    roots: Vec<PathBuf>,
    engine: RevertEngine,
    failure_policy: FailurePolicy,
    retention: usize,
}

impl BackupManager {
    /// A manager searching `roots` in order, without a content store.
    pub fn new(project_root: impl Into<PathBuf>, roots: Vec<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            roots,
            engine: RevertEngine::new(),
            failure_policy: FailurePolicy::default(),
            retention: config::DEFAULT_RETENTION,
        }
    }

    /// A manager configured from the config files of `project_root`.
    pub fn open(project_root: &Path) -> Self {
        Self::from_config(project_root, config::load_config(project_root))
    }

    /// Roots are the project-local root, the shared root (unless disabled), then any extra roots.
    pub fn from_config(project_root: &Path, config: RewindConfig) -> Self {
        let mut roots = vec![path::project_backup_root(project_root)];
        if config.include_global_root {
            roots.extend(path::global_backup_root());
        }
        roots.extend(config.extra_roots);

        let mut manager = Self::new(project_root, roots)
            .with_failure_policy(config.failure_policy)
            .with_retention(config.retention);
        if let Some(dir) = config.artifact_store_dir {
            manager = manager.with_store(Arc::new(LocalContentStore::new(dir)));
        }
        manager
    }

    pub fn with_store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.engine = RevertEngine::with_store(store);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_retention(mut self, keep: usize) -> Self {
        self.retention = keep;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Configured number of snapshots [`BackupManager::prune_default`] keeps.
    pub fn retention(&self) -> usize {
        self.retention
    }

    /// Newest-first catalog of every discoverable snapshot.
    pub fn list_snapshots(&self) -> ScanOutcome {
        scanner::list_snapshots(&self.roots, &self.project_root)
    }

    /// Revert a single conversation by id.
    pub async fn revert_one(&self, id: &str) -> BackupResult<RevertResult> {
        let catalog = self.list_snapshots().snapshots;
        let snapshot = catalog
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| BackupError::SnapshotNotFound(id.to_string()))?;
        Ok(self.engine.revert_one(snapshot).await)
    }

    /// Revert `target_id` and every newer conversation, newest first.
    pub async fn revert_to(&self, target_id: &str) -> RevertSummary {
        let catalog = self.list_snapshots().snapshots;
        cumulative::revert_to(&self.engine, &catalog, target_id, self.failure_policy).await
    }

    /// Keep the newest `keep` snapshots and delete the rest.
    pub async fn prune(&self, keep: usize) -> PruneOutcome {
        let catalog = self.list_snapshots().snapshots;
        retention::prune(&catalog, keep).await
    }

    /// [`BackupManager::prune`] with the configured retention.
    pub async fn prune_default(&self) -> PruneOutcome {
        self.prune(self.retention).await
    }

    pub fn stats(&self) -> BackupStats {
        stats::collect_stats(&self.list_snapshots().snapshots)
    }
}
