//! This is the main entry point for rewind.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = rewind::cli::parse(None).await {
        eprintln!("{}", format!("fatal: {e:#}").red());
        std::process::exit(1);
    }
}
