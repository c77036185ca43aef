use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{Storage, StorageError};

const SCHEMA: &str = include_str!("../sql/schema/sqlite/00_kv.sql");

/// Slots kept in a single `kv` table; blocking calls run on tokio's blocking pool.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// # Errors
    ///
    /// Will return `Err` if the database cannot be opened or the schema cannot be created
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::init(Connection::open(path)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema cannot be created
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|e| StorageError::new(format!("sqlite connection poisoned: {e}")))?;
            f(&guard).map_err(StorageError::from)
        })
        .await
        .map_err(|e| StorageError::new(format!("sqlite task failed: {e}")))?
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = key.to_string();
        self.with_conn(move |conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
        })
        .await
    }

    async fn put_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let key = key.to_string();
        let value = value.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map(|_| ())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_keeps_a_single_row() -> Result<(), StorageError> {
        let storage = SqliteStorage::open_in_memory()?;
        storage.put_slot("golfClubDistances", "[]").await?;
        storage.put_slot("golfClubDistances", "[1]").await?;
        assert_eq!(
            storage.get_slot("golfClubDistances").await?.as_deref(),
            Some("[1]")
        );
        let rows = storage
            .with_conn(|conn| conn.query_row("SELECT COUNT(*) FROM kv", [], |row| row.get::<_, i64>(0)))
            .await?;
        assert_eq!(rows, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_slot_is_none() -> Result<(), StorageError> {
        let storage = SqliteStorage::open_in_memory()?;
        assert_eq!(storage.get_slot("nothing").await?, None);
        Ok(())
    }
}
