//! upilens CLI - UPI QR decoder and rewards eligibility checker
//!
//! Usage:
//!   upilens decode "upi://pay?pa=shop@upi&mc=5812&am=250"
//!   upilens history           Show saved scans
//!   upilens mcc 5812          Look up a category code
//!   upilens status            Show database status

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Decode {
            uri,
            json,
            no_history,
        } => commands::cmd_decode(&cli.db, &uri, json, no_history),
        Commands::History { action, limit } => match action {
            None => commands::cmd_history_list(&cli.db, limit),
            Some(HistoryAction::Clear) => commands::cmd_history_clear(&cli.db),
        },
        Commands::Mcc { code } => commands::cmd_mcc(&code),
        Commands::Status => commands::cmd_status(&cli.db),
    }
}
