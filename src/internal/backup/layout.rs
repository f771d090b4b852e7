//! Naming conventions shared with the snapshot writer.
//!
//! ```text
//! <root>/conversation-<id>-backup/
//!   ├── .snapshot-index.json        (writer bookkeeping, ignored)
//!   ├── src/lib.rs                  (pre-edit content of a modified file)
//!   ├── src/new_module.rs.new       (marker: the conversation created this file)
//!   ├── artifact__Code              (pre-edit content of an external artifact file)
//!   └── artifact__Code.meta         (JSON metadata for the artifact file above)
//! ```

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub const SNAPSHOT_DIR_PREFIX: &str = "conversation-";
pub const SNAPSHOT_DIR_SUFFIX: &str = "-backup";
pub const META_SUFFIX: &str = ".meta";
pub const ARTIFACT_PREFIX: &str = "artifact__";
pub const NEW_FILE_SUFFIX: &str = ".new";
pub const SNAPSHOT_INDEX_FILE: &str = ".snapshot-index.json";

/// Extract the conversation id from a `conversation-<id>-backup` directory name.
pub fn parse_snapshot_dir_name(name: &str) -> Option<&str> {
    name.strip_prefix(SNAPSHOT_DIR_PREFIX)?
        .strip_suffix(SNAPSHOT_DIR_SUFFIX)
        .filter(|id| !id.is_empty())
}

pub fn snapshot_dir_name(id: &str) -> String {
    format!("{SNAPSHOT_DIR_PREFIX}{id}{SNAPSHOT_DIR_SUFFIX}")
}

/// `X` -> `X.meta`
pub fn companion_path(data_path: &Path) -> PathBuf {
    let mut name = OsString::from(data_path.as_os_str());
    name.push(META_SUFFIX);
    PathBuf::from(name)
}

/// If the last component carries the new-file marker, return the path with the marker removed.
///
/// Names are matched on their raw bytes, so non UTF-8 names are classified like any other.
pub fn strip_new_file_marker(relative: &Path) -> Option<PathBuf> {
    let file_name = relative.file_name()?.as_encoded_bytes();
    if file_name.len() <= NEW_FILE_SUFFIX.len() || !file_name.ends_with(NEW_FILE_SUFFIX.as_bytes()) {
        return None;
    }
    // the marker is the last extension, so the stem is the target name
    Some(relative.with_file_name(relative.file_stem()?))
}

/// True for `.meta` companions, which are read alongside their data file and never emitted.
pub fn is_companion(file_name: &OsStr) -> bool {
    file_name.as_encoded_bytes().ends_with(META_SUFFIX.as_bytes())
}

/// True for data files of an external artifact.
pub fn is_artifact(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .starts_with(ARTIFACT_PREFIX.as_bytes())
}

/// Companion metadata written next to an external-artifact data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMeta {
    #[serde(alias = "originalPath")]
    pub name: String,
    pub artifact_id: String,
    #[serde(default)]
    pub artifact_kind: String,
    #[serde(default)]
    pub is_new_file: bool,
}
