//! CLI command tests
//!
//! Commands print to stdout; these tests assert on exit status and on the
//! database side effects, using throwaway databases in temp directories.

use std::path::PathBuf;

use tempfile::TempDir;
use upilens_core::{Database, Eligibility};

use crate::commands::{self, truncate};

fn setup_test_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    (dir, path)
}

// ========== Decode Command Tests ==========

#[test]
fn test_cmd_decode_saves_to_history() {
    let (_dir, db_path) = setup_test_db();

    let result = commands::cmd_decode(
        &db_path,
        "upi://pay?pa=merchant@upi&pn=CoffeeShop&mc=5812&am=250.00",
        false,
        false,
    );
    assert!(result.is_ok());

    let db = Database::open(db_path.to_str().unwrap()).unwrap();
    let scans = db.list_scans(None).unwrap();
    assert_eq!(scans.len(), 1);
    assert_eq!(scans[0].payee_name.as_deref(), Some("CoffeeShop"));
    assert_eq!(scans[0].eligibility, Eligibility::Eligible);
    assert!(scans[0].is_merchant);
}

#[test]
fn test_cmd_decode_no_history_flag() {
    let (_dir, db_path) = setup_test_db();

    commands::cmd_decode(&db_path, "upi://pay?pa=x@bank", false, true).unwrap();

    // --no-history never touches the database file
    assert!(!db_path.exists());
}

#[test]
fn test_cmd_decode_excluded_merchant() {
    let (_dir, db_path) = setup_test_db();

    commands::cmd_decode(&db_path, "upi://pay?pa=atm@upi&mc=6011&am=500", false, false).unwrap();

    let db = Database::open(db_path.to_str().unwrap()).unwrap();
    let scans = db.list_scans(None).unwrap();
    assert_eq!(scans[0].eligibility, Eligibility::Excluded);
    assert_eq!(scans[0].merchant_category_code.as_deref(), Some("6011"));
}

#[test]
fn test_cmd_decode_unrecognized_input_is_ok_and_not_saved() {
    let (_dir, db_path) = setup_test_db();

    let result = commands::cmd_decode(&db_path, "not a qr code", false, false);
    assert!(result.is_ok());
    assert!(!db_path.exists());
}

#[test]
fn test_cmd_decode_json_output() {
    let (_dir, db_path) = setup_test_db();

    let result = commands::cmd_decode(
        &db_path,
        "upi://pay?pa=friend@upi&pn=Alex",
        true,
        true,
    );
    assert!(result.is_ok());

    let result = commands::cmd_decode(&db_path, "garbage", true, true);
    assert!(result.is_ok());
}

// ========== History Command Tests ==========

#[test]
fn test_cmd_history_list_empty() {
    let (_dir, db_path) = setup_test_db();
    assert!(commands::cmd_history_list(&db_path, 20).is_ok());
}

#[test]
fn test_cmd_history_list_and_clear() {
    let (_dir, db_path) = setup_test_db();

    for n in 0..3 {
        let uri = format!("upi://pay?pa=shop{}@upi&mc=5411&am={}", n, 100 * (n + 1));
        commands::cmd_decode(&db_path, &uri, false, false).unwrap();
    }

    assert!(commands::cmd_history_list(&db_path, 2).is_ok());
    assert!(commands::cmd_history_clear(&db_path).is_ok());

    let db = Database::open(db_path.to_str().unwrap()).unwrap();
    assert_eq!(db.count_scans().unwrap(), 0);
}

// ========== Mcc / Status Command Tests ==========

#[test]
fn test_cmd_mcc() {
    assert!(commands::cmd_mcc("5812").is_ok());
    assert!(commands::cmd_mcc("6011").is_ok());
    assert!(commands::cmd_mcc("0000").is_ok());
    assert!(commands::cmd_mcc("not-a-code").is_ok());
}

#[test]
fn test_cmd_status_without_database() {
    let (_dir, db_path) = setup_test_db();
    assert!(commands::cmd_status(&db_path).is_ok());
    // Status is read-only; it must not create the database
    assert!(!db_path.exists());
}

#[test]
fn test_cmd_status_with_scans() {
    let (_dir, db_path) = setup_test_db();
    commands::cmd_decode(&db_path, "upi://pay?pa=x@bank&mc=5812", false, false).unwrap();
    assert!(commands::cmd_status(&db_path).is_ok());
}

#[test]
fn test_cmd_history_list_multibyte_payee() {
    let (_dir, db_path) = setup_test_db();

    // Percent-encoded Devanagari payee name, wider than the display column
    let payee = "%E0%A4%B8".repeat(9);
    let uri = format!("upi://pay?pa=shop@upi&pn={}&mc=5812", payee);
    commands::cmd_decode(&db_path, &uri, false, false).unwrap();

    assert!(commands::cmd_history_list(&db_path, 20).is_ok());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer description", 10), "a longe...");
    assert_eq!(truncate("exactly-10", 10), "exactly-10");
}

#[test]
fn test_truncate_multibyte() {
    // 9 Devanagari chars, 3 bytes each
    let name = "स".repeat(9);
    let cut = truncate(&name, 24);
    assert!(cut.ends_with("..."));
    assert!(cut.len() <= 24);

    // Short enough to keep whole
    assert_eq!(truncate("सस", 10), "सस");
    // Limit falls inside a character: keep only what fits
    assert_eq!(truncate(&"स".repeat(4), 10), "सस...");
}
