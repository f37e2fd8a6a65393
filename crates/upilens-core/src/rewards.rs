//! Rewards-program eligibility rules
//!
//! Transaction rewards are not applicable on the merchant categories below,
//! per the published rewards policy. Each key is a 4-digit MCC string; the
//! value is the exclusion bucket name from the policy. Several codes share a
//! bucket, but matching is always per exact code, never per bucket.

use crate::models::{Eligibility, RewardEstimate, Verdict};

/// Scan-and-pay points per whole 100 of the amount (up to 1.5% cashback)
pub const SCAN_PAY_POINTS_PER_100: u64 = 6;

/// Online-payment points per whole 100 of the amount (0.5% cashback)
pub const ONLINE_POINTS_PER_100: u64 = 2;

/// Sorted (code, exclusion bucket) pairs
static EXCLUDED_MCCS: &[(&str, &str)] = &[
    ("0742", "Horticultural & Vet"),
    ("0743", "Horticultural & Vet"),
    ("0744", "Horticultural & Vet"),
    ("0763", "Agricultural Services"),
    ("0780", "Horticultural & Vet"),
    ("0820", "Agricultural Services"),
    ("0821", "Agricultural Services"),
    ("0822", "Agricultural Services"),
    ("0823", "Agricultural Services"),
    ("0824", "Agricultural Services"),
    ("0825", "Agricultural Services"),
    ("4784", "Transportation"),
    ("4789", "Transportation"),
    ("4812", "Utilities"),
    ("4813", "Utilities"),
    ("4814", "Utilities"),
    ("4816", "Utilities"),
    ("4821", "Utilities"),
    ("4829", "Utilities"),
    ("4899", "Utilities"),
    ("4900", "Utilities"),
    ("5094", "Retail Services"),
    ("5172", "Retail Services"),
    ("5451", "Retail Services"),
    ("5511", "Retail Services"),
    ("5521", "Retail Services"),
    ("5531", "Retail Services"),
    ("5532", "Retail Services"),
    ("5533", "Retail Services"),
    ("5541", "Retail Services"),
    ("5542", "Retail Services"),
    ("5599", "Retail Services"),
    ("5944", "Miscellaneous"),
    ("5960", "Marketing & Advertising"),
    ("5962", "Marketing & Advertising"),
    ("5964", "Marketing & Advertising"),
    ("5965", "Marketing & Advertising"),
    ("5967", "Marketing & Advertising"),
    ("5968", "Marketing & Advertising"),
    ("5969", "Marketing & Advertising"),
    ("5983", "Miscellaneous"),
    ("6011", "Miscellaneous (Financial)"),
    ("6012", "Miscellaneous (Financial)"),
    ("6051", "Miscellaneous (Financial)"),
    ("6300", "Miscellaneous (Insurance)"),
    ("6381", "Miscellaneous (Insurance)"),
    ("6399", "Miscellaneous (Insurance)"),
    ("6513", "Miscellaneous (Real Estate)"),
    ("6529", "Miscellaneous (Stored Value)"),
    ("6540", "Miscellaneous (Stored Value)"),
    ("7311", "Marketing & Advertising"),
    ("7512", "Business Services"),
    ("7523", "Business Services"),
    ("7531", "Business Services"),
    ("7535", "Business Services"),
    ("7538", "Business Services"),
    ("7631", "Business Services"),
    ("8111", "Professional Services"),
    ("8211", "Professional Services"),
    ("8220", "Professional Services"),
    ("8241", "Professional Services"),
    ("8244", "Professional Services"),
    ("8249", "Professional Services"),
    ("8299", "Professional Services"),
    ("8675", "Professional Services"),
    ("8931", "Professional Services"),
    ("9211", "Government Services"),
    ("9222", "Government Services"),
    ("9223", "Government Services"),
    ("9311", "Government Services"),
    ("9399", "Government Services"),
    ("9400", "Government Services"),
    ("9402", "Government Services"),
    ("9405", "Government Services"),
    ("9700", "Government Services"),
    ("9701", "Government Services"),
    ("9702", "Government Services"),
    ("9751", "Government Services"),
    ("9754", "Government Services"),
    ("9950", "Government Services"),
];

/// Look up the exclusion bucket for a category code. Exact match only; the
/// code is taken as-is, no zero-padding or prefix matching.
pub fn exclusion_bucket(code: &str) -> Option<&'static str> {
    EXCLUDED_MCCS
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| EXCLUDED_MCCS[i].1)
}

/// Classify a merchant category code against the rewards policy.
///
/// `None` means the scan carried no category code (a peer-to-peer transfer),
/// which cannot be evaluated against merchant rules. A code absent from the
/// exclusion table is eligible: absence means "not known to be excluded".
pub fn classify(code: Option<&str>) -> Verdict {
    match code {
        None => Verdict {
            eligibility: Eligibility::Unknown,
            reason: "No merchant category code present. Peer-to-peer transfers \
                     cannot be evaluated against merchant category rules; ad-hoc \
                     rewards may still apply outside this check."
                .to_string(),
            excluded_category: None,
        },
        Some(code) => match exclusion_bucket(code) {
            Some(bucket) => Verdict {
                eligibility: Eligibility::Excluded,
                reason: format!(
                    "Merchant category {} is excluded from transaction rewards.",
                    code
                ),
                excluded_category: Some(bucket.to_string()),
            },
            None => Verdict {
                eligibility: Eligibility::Eligible,
                reason: format!(
                    "Merchant category {} is not on the exclusion list and \
                     qualifies for transaction rewards.",
                    code
                ),
                excluded_category: None,
            },
        },
    }
}

/// Estimate rewards for an eligible payment amount.
///
/// Points accrue on whole multiples of 100 only; the remainder earns nothing.
pub fn estimate(amount: f64) -> RewardEstimate {
    let hundreds = (amount.max(0.0) / 100.0).floor() as u64;
    RewardEstimate {
        eligible_amount: hundreds * 100,
        scan_pay_points: hundreds * SCAN_PAY_POINTS_PER_100,
        online_points: hundreds * ONLINE_POINTS_PER_100,
    }
}
