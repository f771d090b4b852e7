//! Path builders for rewind storage: backup roots and config file locations relative to a project root.

use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const REWIND_DIR: &str = ".rewind";
const BACKUPS: &str = "backups";
const CONFIG_FILE: &str = "config.json";
const APP_NAME: &str = "rewind";

/// `{project}/.rewind/backups`, the project-local snapshot root.
pub fn project_backup_root(project_root: &Path) -> PathBuf {
    project_root.join(REWIND_DIR).join(BACKUPS)
}

/// `{data_dir}/rewind/backups`, the shared snapshot root.
pub fn global_backup_root() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME).join(BACKUPS))
}

/// `{project}/.rewind/config.json`
pub fn project_config(project_root: &Path) -> PathBuf {
    project_root.join(REWIND_DIR).join(CONFIG_FILE)
}

/// `{config_dir}/rewind/config.json`
pub fn user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
