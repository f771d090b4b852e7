//! Subcommand implementations. Each module exposes an `Args` struct and an `execute` entry point.

pub mod list;
pub mod prune;
pub mod revert;
pub mod revert_to;
pub mod stats;

use colored::Colorize;

/// Print what a revert changed, one line per path.
pub(crate) fn print_changes(reverted: &[String], deleted: &[String]) {
    for path in reverted {
        println!("{} {path}", "restored".green());
    }
    for path in deleted {
        println!("{} {path}", "deleted ".red());
    }
}

pub(crate) fn print_errors(errors: &[String]) {
    for error in errors {
        eprintln!("{} {error}", "error:".red().bold());
    }
}
