//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// upilens - Decode UPI payment QR codes and check rewards eligibility
#[derive(Parser)]
#[command(name = "upilens")]
#[command(about = "UPI payment-URI decoder with rewards eligibility checks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (scan history)
    #[arg(long, default_value = "upilens.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a UPI payment URI and check rewards eligibility
    Decode {
        /// The raw scanned text, e.g. "upi://pay?pa=shop@upi&mc=5812"
        uri: String,

        /// Print the decoded record and verdict as JSON
        #[arg(long)]
        json: bool,

        /// Do not save this scan to history
        #[arg(long)]
        no_history: bool,
    },

    /// Show saved scans (newest first)
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,

        /// Maximum number of scans to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Look up a merchant category code
    Mcc {
        /// 4-digit category code, e.g. 5812
        code: String,
    },

    /// Show database status (path, size, scan count)
    Status,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Delete all saved scans
    Clear,
}
