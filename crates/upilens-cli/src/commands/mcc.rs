//! Category-code lookup command

use anyhow::Result;
use upilens_core::{classify, mcc, Eligibility};

pub fn cmd_mcc(code: &str) -> Result<()> {
    println!();
    println!("🔎 MCC {}", code);
    println!("   Category: {}", mcc::category_label(code));

    let verdict = classify(Some(code));
    match verdict.eligibility {
        Eligibility::Eligible => println!("   Rewards: ✅ eligible"),
        Eligibility::Excluded => {
            let bucket = verdict.excluded_category.as_deref().unwrap_or("-");
            println!("   Rewards: ❌ excluded ({})", bucket);
        }
        // classify(Some(..)) never returns Unknown
        Eligibility::Unknown => println!("   Rewards: ❓ unknown"),
    }
    println!();
    Ok(())
}
