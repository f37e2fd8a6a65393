//! upilens Core Library
//!
//! Shared functionality for the upilens UPI QR decoder:
//! - UPI payment-URI decoding into structured records
//! - Merchant category code (MCC) lookup tables
//! - Rewards-program eligibility classification and reward estimates
//! - Capped local scan history backed by SQLite

pub mod db;
pub mod error;
pub mod mcc;
pub mod models;
pub mod parser;
pub mod rewards;

pub use db::{Database, HISTORY_CAP};
pub use error::{Error, Result};
pub use models::{Eligibility, PaymentRecord, RewardEstimate, ScanRecord, Verdict};
pub use parser::decode;
pub use rewards::{classify, estimate};
