//! Record store error types.

use thiserror::Error;
use uuid::Uuid;

/// Result type for record store operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur against the record store.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Video not found: {0}")]
    NotFound(Uuid),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

impl DbError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
