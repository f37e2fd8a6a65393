//! Domain models for upilens

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decoded UPI payment URI
///
/// Produced by [`crate::parser::decode`]. Immutable once built; every field
/// except `raw`, `params`, `currency` and `is_merchant` is optional because
/// UPI producers omit anything they do not need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The original scanned text, unmodified
    pub raw: String,
    /// All query parameters, keys lower-cased, values percent-decoded
    pub params: BTreeMap<String, String>,
    /// Payee virtual payment address (`pa`), e.g. `merchant@upi`
    pub payee_address: Option<String>,
    /// Payee display name (`pn`)
    pub payee_name: Option<String>,
    /// 4-digit merchant category code (`mc`); its presence is the sole
    /// signal of a merchant (vs peer-to-peer) transaction
    pub merchant_category_code: Option<String>,
    /// Human-readable category label; present iff the code is present
    pub merchant_category: Option<String>,
    /// Amount (`am`), kept as a string to preserve decimal formatting
    pub amount: Option<String>,
    /// Currency (`cu`), defaults to `INR` when absent
    pub currency: String,
    /// Transaction note (`tn`)
    pub transaction_note: Option<String>,
    /// Transaction id (`tid`)
    pub transaction_id: Option<String>,
    /// Transaction reference (`tr`)
    pub transaction_ref: Option<String>,
    /// True iff a non-empty merchant category code is present
    pub is_merchant: bool,
}

/// Rewards-program eligibility outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eligibility {
    /// Merchant category is not on the exclusion list
    Eligible,
    /// Merchant category is explicitly excluded from rewards
    Excluded,
    /// No category code to evaluate (peer-to-peer transfer)
    Unknown,
}

impl Eligibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::Excluded => "excluded",
            Self::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for Eligibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eligible" => Ok(Self::Eligible),
            "excluded" => Ok(Self::Excluded),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown eligibility: {}", s)),
        }
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying a merchant category code against the rewards policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub eligibility: Eligibility,
    /// Human-readable explanation, always present
    pub reason: String,
    /// Exclusion bucket label; only set when `eligibility` is `Excluded`
    pub excluded_category: Option<String>,
}

/// Estimated rewards for an eligible merchant payment
///
/// Points accrue on whole multiples of 100 of the amount only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEstimate {
    /// Portion of the amount that actually earns points
    pub eligible_amount: u64,
    /// Points for scan-and-pay (6 per 100, up to 1.5% cashback)
    pub scan_pay_points: u64,
    /// Points for online payment (2 per 100, 0.5% cashback)
    pub online_points: u64,
}

/// A saved scan-history entry
///
/// Immutable once written. Retains only the display subset of a decoded
/// record plus the eligibility outcome, not the full parameter map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Stable unique id (truncated hex SHA-256 of raw URI + timestamp)
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub payee_name: Option<String>,
    pub payee_address: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_category: Option<String>,
    pub amount: Option<String>,
    pub currency: String,
    pub is_merchant: bool,
    pub eligibility: Eligibility,
}
