//! Implements `stats` to summarize the backups on disk.

use clap::Parser;

use crate::internal::backup::BackupManager;

#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Print the statistics as JSON
    #[clap(long)]
    pub json: bool,
}

pub fn execute(manager: &BackupManager, args: StatsArgs) -> anyhow::Result<()> {
    let stats = manager.stats();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let format_time = |time: Option<chrono::DateTime<chrono::Utc>>| {
        time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    println!("backups:     {}", stats.snapshot_count);
    println!("files:       {}", stats.total_files);
    println!("total bytes: {}", stats.total_bytes);
    println!("oldest:      {}", format_time(stats.oldest));
    println!("newest:      {}", format_time(stats.newest));
    Ok(())
}
