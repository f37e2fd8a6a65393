//! Scan-history operations
//!
//! The log is a bounded sequence: inserts evict the oldest entries beyond
//! [`HISTORY_CAP`] (FIFO by insertion order) and reads return newest first.
//! Entries are immutable once written.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{format_datetime, parse_datetime, Database};
use crate::error::Result;
use crate::models::{Eligibility, PaymentRecord, ScanRecord, Verdict};

/// Maximum number of saved scans; older entries are evicted first
pub const HISTORY_CAP: usize = 50;

/// Derive a unique scan id from the raw URI and timestamp
///
/// A process-local sequence number disambiguates repeated scans of the same
/// URI within one millisecond.
fn scan_id(raw: &str, created_at: DateTime<Utc>) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static SEQ: AtomicU64 = AtomicU64::new(0);

    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hasher.update(created_at.timestamp_millis().to_be_bytes());
    hasher.update(SEQ.fetch_add(1, Ordering::Relaxed).to_be_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..16].to_string()
}

fn row_to_scan(row: &Row<'_>) -> rusqlite::Result<ScanRecord> {
    let created_at: String = row.get("created_at")?;
    let eligibility: String = row.get("eligibility")?;
    Ok(ScanRecord {
        id: row.get("id")?,
        created_at: parse_datetime(&created_at),
        payee_name: row.get("payee_name")?,
        payee_address: row.get("payee_address")?,
        merchant_category_code: row.get("merchant_category_code")?,
        merchant_category: row.get("merchant_category")?,
        amount: row.get("amount")?,
        currency: row.get("currency")?,
        is_merchant: row.get("is_merchant")?,
        // Unknown is the safe reading for anything unrecognized
        eligibility: eligibility.parse().unwrap_or(Eligibility::Unknown),
    })
}

impl Database {
    /// Save a decoded scan with its eligibility outcome, evicting the oldest
    /// entries once the log exceeds [`HISTORY_CAP`]. Returns the saved entry.
    pub fn add_scan(&self, record: &PaymentRecord, verdict: &Verdict) -> Result<ScanRecord> {
        let created_at = Utc::now();
        let scan = ScanRecord {
            id: scan_id(&record.raw, created_at),
            created_at,
            payee_name: record.payee_name.clone(),
            payee_address: record.payee_address.clone(),
            merchant_category_code: record.merchant_category_code.clone(),
            merchant_category: record.merchant_category.clone(),
            amount: record.amount.clone(),
            currency: record.currency.clone(),
            is_merchant: record.is_merchant,
            eligibility: verdict.eligibility,
        };

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO scan_history
                (id, created_at, payee_name, payee_address, merchant_category_code,
                 merchant_category, amount, currency, is_merchant, eligibility)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                scan.id,
                format_datetime(scan.created_at),
                scan.payee_name,
                scan.payee_address,
                scan.merchant_category_code,
                scan.merchant_category,
                scan.amount,
                scan.currency,
                scan.is_merchant,
                scan.eligibility.as_str(),
            ],
        )?;

        // Evict beyond the cap, oldest first (rowid is insertion order)
        let evicted = tx.execute(
            "DELETE FROM scan_history WHERE rowid NOT IN \
             (SELECT rowid FROM scan_history ORDER BY rowid DESC LIMIT ?)",
            params![HISTORY_CAP as i64],
        )?;
        tx.commit()?;

        if evicted > 0 {
            debug!(evicted, "trimmed scan history to cap");
        }

        Ok(scan)
    }

    /// List saved scans, newest first
    pub fn list_scans(&self, limit: Option<usize>) -> Result<Vec<ScanRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, created_at, payee_name, payee_address, merchant_category_code, \
                    merchant_category, amount, currency, is_merchant, eligibility \
             FROM scan_history ORDER BY rowid DESC LIMIT ?",
        )?;

        let limit = limit.unwrap_or(HISTORY_CAP) as i64;
        let scans = stmt
            .query_map(params![limit], row_to_scan)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(scans)
    }

    /// Delete all saved scans
    pub fn clear_scans(&self) -> Result<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM scan_history", [])?;
        Ok(deleted)
    }

    /// Number of saved scans
    pub fn count_scans(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM scan_history", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode;
    use crate::rewards::classify;

    fn sample(n: usize) -> (PaymentRecord, Verdict) {
        let uri = format!("upi://pay?pa=shop{}@upi&pn=Shop{}&mc=5812&am=100", n, n);
        let record = decode(&uri).unwrap();
        let verdict = classify(record.merchant_category_code.as_deref());
        (record, verdict)
    }

    #[test]
    fn test_add_and_list() {
        let db = Database::in_memory().unwrap();
        let (record, verdict) = sample(1);

        let saved = db.add_scan(&record, &verdict).unwrap();
        assert_eq!(saved.id.len(), 16);
        assert_eq!(saved.payee_name.as_deref(), Some("Shop1"));
        assert_eq!(saved.eligibility, Eligibility::Eligible);

        let scans = db.list_scans(None).unwrap();
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0], saved);
    }

    #[test]
    fn test_list_is_newest_first() {
        let db = Database::in_memory().unwrap();
        for n in 0..3 {
            let (record, verdict) = sample(n);
            db.add_scan(&record, &verdict).unwrap();
        }

        let scans = db.list_scans(None).unwrap();
        assert_eq!(scans.len(), 3);
        assert_eq!(scans[0].payee_name.as_deref(), Some("Shop2"));
        assert_eq!(scans[2].payee_name.as_deref(), Some("Shop0"));
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let db = Database::in_memory().unwrap();
        for n in 0..HISTORY_CAP + 5 {
            let (record, verdict) = sample(n);
            db.add_scan(&record, &verdict).unwrap();
        }

        assert_eq!(db.count_scans().unwrap(), HISTORY_CAP as i64);

        let scans = db.list_scans(None).unwrap();
        assert_eq!(scans.len(), HISTORY_CAP);
        // Newest survives, the 5 oldest are gone
        assert_eq!(
            scans[0].payee_name.as_deref(),
            Some(format!("Shop{}", HISTORY_CAP + 4).as_str())
        );
        assert_eq!(
            scans.last().unwrap().payee_name.as_deref(),
            Some("Shop5")
        );
    }

    #[test]
    fn test_clear() {
        let db = Database::in_memory().unwrap();
        let (record, verdict) = sample(1);
        db.add_scan(&record, &verdict).unwrap();

        assert_eq!(db.clear_scans().unwrap(), 1);
        assert_eq!(db.count_scans().unwrap(), 0);
        assert!(db.list_scans(None).unwrap().is_empty());
    }

    #[test]
    fn test_p2p_scan_keeps_unknown_eligibility() {
        let db = Database::in_memory().unwrap();
        let record = decode("upi://pay?pa=friend@upi&pn=Alex").unwrap();
        let verdict = classify(record.merchant_category_code.as_deref());

        let saved = db.add_scan(&record, &verdict).unwrap();
        assert!(!saved.is_merchant);
        assert_eq!(saved.eligibility, Eligibility::Unknown);

        let scans = db.list_scans(None).unwrap();
        assert_eq!(scans[0].eligibility, Eligibility::Unknown);
        assert!(scans[0].merchant_category_code.is_none());
    }

    #[test]
    fn test_history_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scans.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::open(path).unwrap();
            let (record, verdict) = sample(7);
            db.add_scan(&record, &verdict).unwrap();
        }

        let db = Database::open(path).unwrap();
        let scans = db.list_scans(None).unwrap();
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].payee_name.as_deref(), Some("Shop7"));
    }

    #[test]
    fn test_list_respects_limit() {
        let db = Database::in_memory().unwrap();
        for n in 0..5 {
            let (record, verdict) = sample(n);
            db.add_scan(&record, &verdict).unwrap();
        }

        let scans = db.list_scans(Some(2)).unwrap();
        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].payee_name.as_deref(), Some("Shop4"));
    }
}
