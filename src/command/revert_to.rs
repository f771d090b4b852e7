//! Implements `revert-to` to undo a conversation together with every later one.

use anyhow::bail;
use clap::Parser;
use colored::Colorize;

use crate::internal::backup::{BackupManager, FailurePolicy};

#[derive(Parser, Debug, Clone)]
pub struct RevertToArgs {
    /// Oldest conversation id to undo; every newer conversation is undone first
    pub id: String,
    /// Stop at the first conversation that cannot be fully reverted
    #[clap(long)]
    pub stop_on_failure: bool,
}

pub async fn execute(manager: &BackupManager, args: RevertToArgs) -> anyhow::Result<()> {
    let manager = if args.stop_on_failure {
        manager
            .clone()
            .with_failure_policy(FailurePolicy::StopOnFirstFailure)
    } else {
        manager.clone()
    };

    let summary = manager.revert_to(&args.id).await;
    for id in &summary.order {
        println!("{} {id}", "reverted".green());
    }
    println!(
        "{} file(s) restored, {} deleted",
        summary.total_reverted, summary.total_deleted
    );
    for id in &summary.skipped {
        println!("{} {id}", "skipped ".yellow());
    }

    if !summary.success {
        super::print_errors(&summary.errors);
        bail!("revert to conversation '{}' incomplete", args.id);
    }
    Ok(())
}
