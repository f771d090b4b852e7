//! Implements `prune` to delete all but the newest conversation backups.

use anyhow::bail;
use clap::Parser;

use crate::internal::backup::BackupManager;

#[derive(Parser, Debug, Clone)]
pub struct PruneArgs {
    /// Number of newest backups to keep (defaults to the configured retention)
    #[clap(long, short)]
    pub keep: Option<usize>,
}

pub async fn execute(manager: &BackupManager, args: PruneArgs) -> anyhow::Result<()> {
    let keep = args.keep.unwrap_or(manager.retention());
    let outcome = manager.prune(keep).await;
    for id in &outcome.removed_ids {
        println!("Removed {id}");
    }
    println!("Pruned {} backup(s), kept up to {keep}", outcome.pruned);

    if !outcome.errors.is_empty() {
        super::print_errors(&outcome.errors);
        bail!("failed to remove {} backup(s)", outcome.errors.len());
    }
    Ok(())
}
