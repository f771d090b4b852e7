//! Rewind configuration: loading and merging the project-local and user-global tiers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{internal::backup::FailurePolicy, utils::path};

pub const DEFAULT_RETENTION: usize = 10;

/// Effective configuration after merging every tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewindConfig {
    /// Number of newest snapshots `prune` keeps.
    pub retention: usize,
    /// Additional backup roots, searched after the default ones.
    pub extra_roots: Vec<PathBuf>,
    /// Directory for the local artifact content store, if artifacts are reverted.
    pub artifact_store_dir: Option<PathBuf>,
    pub failure_policy: FailurePolicy,
    /// Whether the shared `{data_dir}/rewind/backups` root is searched.
    pub include_global_root: bool,
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            retention: DEFAULT_RETENTION,
            extra_roots: Vec::new(),
            artifact_store_dir: None,
            failure_policy: FailurePolicy::default(),
            include_global_root: true,
        }
    }
}

/// One config file as written on disk; every field is optional so tiers can be layered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub retention: Option<usize>,
    #[serde(default)]
    pub extra_roots: Vec<PathBuf>,
    #[serde(default)]
    pub artifact_store_dir: Option<PathBuf>,
    #[serde(default)]
    pub failure_policy: Option<FailurePolicy>,
    #[serde(default)]
    pub include_global_root: Option<bool>,
}

/// Load configuration for `project_root` from the two-tier hierarchy.
///
/// 1. `{project_root}/.rewind/config.json` (project-local)
/// 2. `~/.config/rewind/config.json` (user-global)
///
/// Scalar settings from the project tier win; `extra_roots` from both tiers
/// are collected, project first. Relative paths resolve against the project root.
pub fn load_config(project_root: &Path) -> RewindConfig {
    let user = path::user_config();
    load_config_from(project_root, &path::project_config(project_root), user.as_deref())
}

/// [`load_config`] with explicit file locations.
pub fn load_config_from(
    project_root: &Path,
    project_config: &Path,
    user_config: Option<&Path>,
) -> RewindConfig {
    let project = load_config_file(project_config).unwrap_or_default();
    let user = user_config.and_then(load_config_file).unwrap_or_default();
    merge(project_root, project, user)
}

fn merge(project_root: &Path, project: ConfigFile, user: ConfigFile) -> RewindConfig {
    let defaults = RewindConfig::default();
    let resolve = |p: PathBuf| path::resolve_against(project_root, &p);

    RewindConfig {
        retention: project
            .retention
            .or(user.retention)
            .unwrap_or(defaults.retention),
        extra_roots: project
            .extra_roots
            .into_iter()
            .chain(user.extra_roots)
            .map(resolve)
            .collect(),
        artifact_store_dir: project
            .artifact_store_dir
            .or(user.artifact_store_dir)
            .map(resolve),
        failure_policy: project
            .failure_policy
            .or(user.failure_policy)
            .unwrap_or(defaults.failure_policy),
        include_global_root: project
            .include_global_root
            .or(user.include_global_root)
            .unwrap_or(defaults.include_global_root),
    }
}

fn load_config_file(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!("Failed to parse rewind config {}: {}", path.display(), e);
            e
        })
        .ok()
}
