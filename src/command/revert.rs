//! Implements `revert` to undo the edits of one conversation.

use anyhow::bail;
use clap::Parser;

use crate::internal::backup::BackupManager;

#[derive(Parser, Debug, Clone)]
pub struct RevertArgs {
    /// Conversation id to revert
    pub id: String,
}

pub async fn execute(manager: &BackupManager, args: RevertArgs) -> anyhow::Result<()> {
    let result = manager.revert_one(&args.id).await?;
    super::print_changes(&result.reverted, &result.deleted);
    if !result.success {
        super::print_errors(&result.errors);
        bail!(
            "revert of conversation '{}' incomplete ({} error(s)); backup kept for retry",
            args.id,
            result.errors.len()
        );
    }
    Ok(())
}
