//! Scan-history storage with connection pooling and migrations
//!
//! A single SQLite file backs the capped scan log. The history contract
//! (bounded, insert-evicts-oldest, newest-first reads) lives in `history`;
//! this module owns the pool, pragmas, and schema.

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod history;

pub use history::HISTORY_CAP;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Timestamp format used in the database
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

pub(crate) fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Open (creating if needed) the database at `path` and run migrations
    pub fn open(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(4).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Uses a temporary file rather than `:memory:` because each pooled
    /// connection would otherwise get its own private in-memory database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("upilens_test_{}_{}.db", std::process::id(), id));

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::open(path.to_string_lossy().as_ref())
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block the writer
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: safe for power loss, faster than FULL
            PRAGMA synchronous = NORMAL;

            -- Scan history (capped; see history::HISTORY_CAP)
            -- rowid doubles as the insertion-order sequence for eviction
            CREATE TABLE IF NOT EXISTS scan_history (
                id TEXT PRIMARY KEY,
                created_at DATETIME NOT NULL,
                payee_name TEXT,
                payee_address TEXT,
                merchant_category_code TEXT,
                merchant_category TEXT,
                amount TEXT,
                currency TEXT NOT NULL DEFAULT 'INR',
                is_merchant INTEGER NOT NULL DEFAULT 0,
                eligibility TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_scan_history_created
                ON scan_history(created_at);
            "#,
        )?;

        info!(path = %self.db_path, "database ready");
        Ok(())
    }
}
