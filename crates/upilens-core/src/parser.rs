//! UPI payment-URI decoder
//!
//! Decodes `upi://...` deep links (as carried in payment QR codes) into a
//! [`PaymentRecord`]. This is a best-effort decoder for uncontrolled
//! physical-world input, not a strict validator: anything after the scheme
//! yields a record, malformed field encodings fall back to their raw text,
//! and the only rejection is input that is not a UPI URI at all.

use std::collections::BTreeMap;

use tracing::debug;

use crate::mcc;
use crate::models::PaymentRecord;

const SCHEME: &str = "upi://";

/// Decode a raw scanned string into a payment record.
///
/// Returns `None` when the input does not start with the case-insensitive
/// `upi://` scheme. A URI with no query component decodes to a minimal
/// record with empty params.
pub fn decode(input: &str) -> Option<PaymentRecord> {
    let has_scheme = input
        .get(..SCHEME.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(SCHEME));
    if !has_scheme {
        return None;
    }

    let params = match input.find('?') {
        Some(pos) => parse_query(&input[pos + 1..]),
        None => BTreeMap::new(),
    };

    // Empty values are treated as absent, matching what UPI apps do
    let field = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();

    let merchant_category_code = field("mc");
    let merchant_category = merchant_category_code
        .as_deref()
        .map(|code| mcc::category_label(code).to_string());
    let is_merchant = merchant_category_code.is_some();

    let record = PaymentRecord {
        raw: input.to_string(),
        payee_address: field("pa"),
        payee_name: field("pn"),
        amount: field("am"),
        currency: field("cu").unwrap_or_else(|| "INR".to_string()),
        transaction_note: field("tn"),
        transaction_id: field("tid"),
        transaction_ref: field("tr"),
        merchant_category_code,
        merchant_category,
        is_merchant,
        params,
    };

    debug!(
        payee = record.payee_address.as_deref().unwrap_or("-"),
        mcc = record.merchant_category_code.as_deref().unwrap_or("-"),
        merchant = record.is_merchant,
        "decoded upi uri"
    );

    Some(record)
}

/// Split a query string into lower-cased key / decoded value pairs.
/// Later occurrences of a key overwrite earlier ones.
fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(percent_decode(key).to_lowercase(), percent_decode(value));
    }
    params
}

/// Decode one percent-encoded query-string field.
///
/// `+` decodes to a space. A truncated or non-hex escape, or bytes that do
/// not form valid UTF-8, fall back to the raw undecoded field rather than
/// failing the whole record.
fn percent_decode(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => return field.to_string(),
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| field.to_string())
}
