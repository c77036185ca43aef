use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaddieError {
    #[error("invalid target distance: {0}")]
    InvalidTargetDistance(String),
    #[error("club catalog is empty")]
    EmptyCatalog,
    #[error("invalid club: {0}")]
    InvalidClub(String),
    #[error("duplicate club id: {0}")]
    DuplicateClubId(String),
    #[error("invalid conditions: {0}")]
    InvalidConditions(String),
    #[error("conditions unavailable: {0}")]
    ConditionsUnavailable(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<StorageError> for CaddieError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CaddieError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
