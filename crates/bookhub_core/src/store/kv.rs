//! Blob persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the key-value read/write seam the catalog persists through.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Writes replace the whole value for a key; there are no partial writes.
//! - Implementations must reject connections without an applied schema.

use crate::store::migrations::{current_version, latest_version};
use crate::store::{StoreError, StoreResult};
use rusqlite::{params, Connection};

/// Key-value persistence contract for opaque snapshot blobs.
pub trait BlobStore {
    /// Reads the value stored under `key`, or `None` when absent.
    fn read_blob(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any prior value.
    fn write_blob(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed blob store over the `blobs` table.
pub struct SqliteBlobStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlobStore<'conn> {
    /// Wraps a connection after verifying its schema version.
    ///
    /// # Errors
    /// - [`StoreError::UninitializedConnection`] when the connection was not
    ///   opened through [`crate::store::open_store`] (or migrations failed).
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let actual = current_version(conn)?;
        let expected = latest_version();
        if actual != expected {
            return Err(StoreError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore<'_> {
    fn read_blob(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM blobs WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn write_blob(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;

        Ok(())
    }
}
