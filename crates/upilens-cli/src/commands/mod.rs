//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `decode` - Decode a UPI URI, classify it, and save to history
//! - `history` - Scan-history commands (list, clear)
//! - `mcc` - Category-code lookup
//! - `status` - Database status

pub mod decode;
pub mod history;
pub mod mcc;
pub mod status;

// Re-export command functions for main.rs
pub use decode::*;
pub use history::*;
pub use mcc::*;
pub use status::*;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use upilens_core::Database;

/// Open the scan-history database, creating it if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    debug!(path = path_str, "opening scan-history database");
    Database::open(path_str).context("Failed to open database")
}

/// Truncate a string to a maximum byte length, adding "..." if truncated
///
/// Payee names are percent-decoded Unicode, so the cut must land on a char
/// boundary, never a fixed byte offset.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let limit = max.saturating_sub(3);
    let mut end = 0;
    for (idx, ch) in s.char_indices() {
        if idx + ch.len_utf8() > limit {
            break;
        }
        end = idx + ch.len_utf8();
    }
    format!("{}...", &s[..end])
}
