//! Cumulative revert: undo a target conversation and every newer one.

use serde::{Deserialize, Serialize};

use super::{Snapshot, engine::RevertEngine};

/// What to do once a snapshot in the window fails to revert completely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Keep reverting older snapshots; they usually cover other paths.
    #[default]
    Continue,
    /// Stop at the first incomplete snapshot and leave the older ones alone.
    StopOnFirstFailure,
}

/// Aggregate outcome of [`revert_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevertSummary {
    pub success: bool,
    /// Conversation ids in the order they were reverted.
    pub order: Vec<String>,
    pub total_reverted: usize,
    pub total_deleted: usize,
    pub errors: Vec<String>,
    /// Ids left untouched after a stop under [`FailurePolicy::StopOnFirstFailure`].
    pub skipped: Vec<String>,
}

/// Revert `target_id` and every snapshot newer than it.
///
/// `catalog` must be newest-first. Each snapshot captured file state right
/// before its own conversation edited it, so applying the window newest-first
/// ends at the state immediately before the target conversation began. The
/// window is processed strictly one snapshot at a time.
pub async fn revert_to(
    engine: &RevertEngine,
    catalog: &[Snapshot],
    target_id: &str,
    policy: FailurePolicy,
) -> RevertSummary {
    let Some(index) = catalog.iter().position(|s| s.id == target_id) else {
        return RevertSummary {
            success: false,
            errors: vec![format!("No backup found for conversation '{target_id}'")],
            ..RevertSummary::default()
        };
    };

    let window = &catalog[..=index];
    let mut summary = RevertSummary {
        success: true,
        ..RevertSummary::default()
    };

    for (position, snapshot) in window.iter().enumerate() {
        let result = engine.revert_one(snapshot).await;
        summary.order.push(snapshot.id.clone());
        summary.total_reverted += result.reverted.len();
        summary.total_deleted += result.deleted.len();
        summary.errors.extend(
            result
                .errors
                .into_iter()
                .map(|e| format!("[{}] {e}", snapshot.id)),
        );

        if !result.success {
            summary.success = false;
            if policy == FailurePolicy::StopOnFirstFailure {
                summary.skipped = window[position + 1..]
                    .iter()
                    .map(|s| s.id.clone())
                    .collect();
                tracing::warn!(
                    conversation = %snapshot.id,
                    skipped = summary.skipped.len(),
                    "stopping cumulative revert after incomplete snapshot"
                );
                break;
            }
        }
    }

    summary
}
