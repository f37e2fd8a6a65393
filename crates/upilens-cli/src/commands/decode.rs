//! Decode command implementation

use std::path::Path;

use anyhow::Result;
use upilens_core::{classify, decode, estimate, Eligibility, PaymentRecord, Verdict};

use super::open_db;

pub fn cmd_decode(db_path: &Path, uri: &str, json: bool, no_history: bool) -> Result<()> {
    let Some(record) = decode(uri) else {
        // Not an error: the input is simply not a payment URI
        if json {
            let out = serde_json::json!({ "recognized": false, "raw": uri });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("Not a UPI payment URI (expected it to start with upi://).");
            println!("Raw text: {}", uri);
        }
        return Ok(());
    };

    let verdict = classify(record.merchant_category_code.as_deref());

    if !no_history {
        let db = open_db(db_path)?;
        db.add_scan(&record, &verdict)?;
    }

    if json {
        let out = serde_json::json!({
            "recognized": true,
            "record": record,
            "verdict": verdict,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_record(&record);
    print_verdict(&record, &verdict);
    Ok(())
}

fn print_record(record: &PaymentRecord) {
    println!();
    if record.is_merchant {
        println!("🏪 Merchant Payment");
    } else {
        println!("👤 Personal Payment (P2P)");
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if let Some(name) = &record.payee_name {
        println!("   Payee: {}", name);
    }
    if let Some(address) = &record.payee_address {
        println!("   VPA: {}", address);
    }
    if let (Some(code), Some(category)) =
        (&record.merchant_category_code, &record.merchant_category)
    {
        println!("   Category: {} ({})", category, code);
    }
    if let Some(amount) = &record.amount {
        println!("   Amount: {} {}", amount, record.currency);
    }
    if let Some(note) = &record.transaction_note {
        println!("   Note: {}", note);
    }
    if let Some(id) = &record.transaction_id {
        println!("   Transaction id: {}", id);
    }
    if let Some(reference) = &record.transaction_ref {
        println!("   Reference: {}", reference);
    }
}

fn print_verdict(record: &PaymentRecord, verdict: &Verdict) {
    println!();
    match verdict.eligibility {
        Eligibility::Eligible => {
            println!("✅ Eligible for Rewards");
            println!("   {}", verdict.reason);
            if let Some(amount) = record.amount.as_deref().and_then(|a| a.parse::<f64>().ok()) {
                let est = estimate(amount);
                if est.eligible_amount > 0 {
                    println!();
                    println!("   Earning amount: {} {}", est.eligible_amount, record.currency);
                    println!("   Scan & Pay: {} points (up to 1.5% cashback)", est.scan_pay_points);
                    println!("   Online: {} points (0.5% cashback)", est.online_points);
                } else {
                    println!("   Points accrue on multiples of 100 only; this amount earns none.");
                }
            }
        }
        Eligibility::Excluded => {
            println!("❌ Not Eligible");
            println!("   {}", verdict.reason);
            if let Some(bucket) = &verdict.excluded_category {
                println!("   Excluded category: {}", bucket);
            }
        }
        Eligibility::Unknown => {
            println!("❓ Cannot Determine");
            println!("   {}", verdict.reason);
        }
    }
    println!();
}
