//! Scan-history command implementations

use std::path::Path;

use anyhow::Result;
use upilens_core::Eligibility;

use super::{open_db, truncate};

pub fn cmd_history_list(db_path: &Path, limit: usize) -> Result<()> {
    let db = open_db(db_path)?;
    let scans = db.list_scans(Some(limit))?;

    if scans.is_empty() {
        println!("No saved scans. Decode one with:");
        println!("  upilens decode \"upi://pay?pa=shop@upi&mc=5812\"");
        return Ok(());
    }

    let total = db.count_scans()?;

    println!();
    println!("🕘 Scan History ({} saved)", total);
    println!("   ─────────────────────────────────────────────────────────────");

    for scan in scans {
        let outcome = match scan.eligibility {
            Eligibility::Eligible => "✅",
            Eligibility::Excluded => "❌",
            Eligibility::Unknown => "❓",
        };
        let payee = scan
            .payee_name
            .or(scan.payee_address)
            .unwrap_or_else(|| "(unknown payee)".to_string());
        let amount = match scan.amount {
            Some(amount) => format!("{} {}", amount, scan.currency),
            None => "-".to_string(),
        };
        let category = scan.merchant_category.unwrap_or_else(|| "P2P".to_string());

        println!(
            "   {} {} │ {} │ {:>12} │ {}",
            outcome,
            scan.created_at.format("%Y-%m-%d %H:%M"),
            truncate(&payee, 24),
            amount,
            truncate(&category, 30)
        );
    }

    Ok(())
}

pub fn cmd_history_clear(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    let deleted = db.clear_scans()?;
    println!("🗑️  Deleted {} saved scan(s).", deleted);
    Ok(())
}
