//! Implements `list` to show discovered conversation backups, newest first.

use clap::Parser;
use colored::Colorize;

use crate::internal::backup::BackupManager;

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Print the catalog as JSON
    #[clap(long)]
    pub json: bool,
}

pub fn execute(manager: &BackupManager, args: ListArgs) -> anyhow::Result<()> {
    let outcome = manager.list_snapshots();
    for warning in &outcome.warnings {
        eprintln!("{} {warning}", "warning:".yellow());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.snapshots)?);
        return Ok(());
    }

    if outcome.snapshots.is_empty() {
        println!("No conversation backups found");
        return Ok(());
    }
    for snapshot in &outcome.snapshots {
        let new_files = snapshot.records.iter().filter(|r| r.is_new_file()).count();
        println!(
            "{}  {}  {} file(s), {} created",
            snapshot.id.yellow(),
            snapshot.created_at.format("%Y-%m-%d %H:%M:%S"),
            snapshot.records.len(),
            new_files
        );
    }
    Ok(())
}
