//! Reframe Storage Layer
//!
//! Implements the ReframeStore trait using SQLite.
//!
//! # Examples
//!
//! ```no_run
//! use reframe_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for reframe operations
//! ```

#![warn(missing_docs)]

use reframe_domain::traits::{ReframeQuery, ReframeStore};
use reframe_domain::{ReframeId, SavedReframe};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Reframe not found
    #[error("Reframe not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A reframe with the same text is already saved
    #[error("Reframe already saved")]
    Duplicate,
}

/// SQLite-based implementation of ReframeStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reframe_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("reframes.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        debug!("Opening reframe store at {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    /// Number of saved reframes
    pub fn count(&self) -> Result<usize, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reframes", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Delete a reframe, failing if it does not exist
    pub fn remove_reframe(&mut self, id: ReframeId) -> Result<(), StoreError> {
        if self.delete_reframe(id)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id.to_string()))
        }
    }

    /// Convert ReframeId to bytes for storage
    fn reframe_id_to_bytes(id: ReframeId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to ReframeId
    fn bytes_to_reframe_id(bytes: &[u8]) -> Result<ReframeId, StoreError> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| {
            StoreError::InvalidData(format!(
                "Expected 16 bytes for ReframeId, got {}",
                bytes.len()
            ))
        })?;
        Ok(ReframeId::from_value(u128::from_be_bytes(arr)))
    }

    /// Map a `id, text, created_at` row
    fn row_to_reframe(row: &Row<'_>) -> rusqlite::Result<SavedReframe> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_reframe_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        Ok(SavedReframe {
            id,
            text: row.get(1)?,
            created_at: row.get::<_, i64>(2)? as u64,
        })
    }
}

impl ReframeStore for SqliteStore {
    type Error = StoreError;

    fn save_reframe(&mut self, reframe: SavedReframe) -> Result<ReframeId, Self::Error> {
        let id_bytes = Self::reframe_id_to_bytes(reframe.id);

        let exists: bool = self
            .conn
            .query_row(
                "SELECT 1 FROM reframes WHERE id = ?1 OR text = ?2",
                params![&id_bytes, &reframe.text],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);

        if exists {
            debug!("Skipping duplicate reframe {}", reframe.id);
            return Err(StoreError::Duplicate);
        }

        self.conn.execute(
            "INSERT INTO reframes (id, text, created_at) VALUES (?1, ?2, ?3)",
            params![&id_bytes, &reframe.text, reframe.created_at as i64],
        )?;

        debug!("Saved reframe {}", reframe.id);
        Ok(reframe.id)
    }

    fn get_reframe(&self, id: ReframeId) -> Result<Option<SavedReframe>, Self::Error> {
        let id_bytes = Self::reframe_id_to_bytes(id);

        let reframe = self
            .conn
            .query_row(
                "SELECT id, text, created_at FROM reframes WHERE id = ?1",
                params![&id_bytes],
                Self::row_to_reframe,
            )
            .optional()?;

        Ok(reframe)
    }

    fn list_reframes(&self, query: &ReframeQuery) -> Result<Vec<SavedReframe>, Self::Error> {
        let mut sql = String::from("SELECT id, text, created_at FROM reframes ORDER BY created_at ASC, id ASC");

        // lower() in SQLite only folds ASCII; filter on Rust-side lowercase instead
        let needle = query.contains.as_ref().map(|s| s.to_lowercase());
        let mut params: Vec<i64> = Vec::new();
        if let (None, Some(limit)) = (&needle, query.limit) {
            sql.push_str(" LIMIT ?1");
            params.push(limit as i64);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut reframes = stmt
            .query_map(rusqlite::params_from_iter(params), Self::row_to_reframe)?
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(needle) = &needle {
            reframes.retain(|r| r.text.to_lowercase().contains(needle.as_str()));
            if let Some(limit) = query.limit {
                reframes.truncate(limit);
            }
        }

        Ok(reframes)
    }

    fn delete_reframe(&mut self, id: ReframeId) -> Result<bool, Self::Error> {
        let id_bytes = Self::reframe_id_to_bytes(id);
        let deleted = self
            .conn
            .execute("DELETE FROM reframes WHERE id = ?1", params![&id_bytes])?;

        debug!("Deleted {} reframe(s) for {}", deleted, id);
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_bytes_round_trip() {
        let id = ReframeId::new();
        let bytes = SqliteStore::reframe_id_to_bytes(id);
        assert_eq!(bytes.len(), 16);
        assert_eq!(SqliteStore::bytes_to_reframe_id(&bytes).unwrap(), id);
    }

    #[test]
    fn test_bytes_wrong_length() {
        let err = SqliteStore::bytes_to_reframe_id(&[0u8; 3]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[test]
    fn test_count_empty() {
        let store = SqliteStore::new(":memory:").unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }
}
