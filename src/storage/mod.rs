pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::CaddieError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Slot holding the saved club distances.
pub const CLUB_DISTANCES_KEY: &str = "golfClubDistances";

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Flat key-value persistence: each key names one opaque slot.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_slot(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn put_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// # Errors
///
/// Will return `Err` if the slot cannot be read (`Storage`) or does not hold
/// valid json for `T` (`Parse`)
pub async fn get_json<T>(storage: &dyn Storage, key: &str) -> Result<Option<T>, CaddieError>
where
    T: for<'de> Deserialize<'de>,
{
    match storage.get_slot(key).await? {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

/// # Errors
///
/// Will return `Err` if the value cannot be serialized or written
pub async fn put_json<T>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), CaddieError>
where
    T: Serialize + ?Sized + Sync,
{
    let payload = serde_json::to_string(value)?;
    storage.put_slot(key, &payload).await?;
    Ok(())
}
