//! OPAC CLI - Librarian console for library membership
//!
//! This CLI gives a librarian a terminal interface to:
//! - Register, list, update, and remove members
//! - Inspect total and average membership fees

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod console;
mod output;

use output::OutputFormat;

/// OPAC CLI application
#[derive(Parser)]
#[command(name = "opac")]
#[command(about = "OPAC - Librarian console for library membership", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format for member listings (table, json)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Log level
    #[arg(long, env = "OPAC_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        cli.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    console::run(cli.output)
}
