//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Timestamps are RFC 3339 UTC text with millisecond precision, generated by
/// `SQLite` so that the store is the only clock.
const CREATE_CUSTOMERS: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        dob TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL DEFAULT '',
        contact TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    )
";

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:database.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and makes sure the `customers` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or the schema creation fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        let db = Self { pool };
        db.ensure_schema().await?;

        tracing::debug!(database_url, "database ready");
        Ok(db)
    }

    /// Create the `customers` table if it does not exist yet.
    ///
    /// Safe to run on every startup; an existing table and its rows are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_CUSTOMERS).execute(&self.pool).await?;
        Ok(())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
