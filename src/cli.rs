//! CLI entry for rewind, defining clap subcommands, resolving the project and dispatching each command handler.
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::{command, internal::backup::BackupManager, utils::path};

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(
    name = "rewind",
    about = "Rewind: undo the edits made during prior AI editing conversations",
    version
)]
struct Cli {
    /// Project root the backups belong to (defaults to the current directory)
    #[arg(long, short = 'C', global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommand's execute and args are defined in the `command` module.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "List conversation backups, newest first")]
    List(command::list::ListArgs),
    #[command(about = "Undo the edits of a single conversation")]
    Revert(command::revert::RevertArgs),
    #[command(about = "Undo a conversation and every conversation after it")]
    RevertTo(command::revert_to::RevertToArgs),
    #[command(about = "Delete old conversation backups")]
    Prune(command::prune::PruneArgs),
    #[command(about = "Show backup statistics")]
    Stats(command::stats::StatsArgs),
}

/// Parse the arguments and execute the corresponding function.
/// - `args`: `None` to read the process arguments, or a full argv (including the program name).
pub async fn parse(args: Option<&[&str]>) -> anyhow::Result<()> {
    let cli = match args {
        Some(args) => Cli::try_parse_from(args)?,
        None => Cli::parse(),
    };

    let project_root = resolve_project_root(cli.project)?;
    let manager = BackupManager::open(&project_root);
    tracing::debug!(
        project = %project_root.display(),
        roots = ?manager.roots(),
        "resolved backup roots"
    );

    match cli.command {
        Commands::List(args) => command::list::execute(&manager, args),
        Commands::Revert(args) => command::revert::execute(&manager, args).await,
        Commands::RevertTo(args) => command::revert_to::execute(&manager, args).await,
        Commands::Prune(args) => command::prune::execute(&manager, args).await,
        Commands::Stats(args) => command::stats::execute(&manager, args),
    }
}

/// The `--project` path made absolute against the current directory, so restore targets are absolute.
fn resolve_project_root(project: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(match project {
        Some(project) => path::resolve_against(&cwd, &project),
        None => cwd,
    })
}
