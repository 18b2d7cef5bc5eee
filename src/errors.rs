// errors.rs
use thiserror::Error;

/// Errors originating from the local side of the app
/// (configuration, the SQLite store, thread-local plumbing).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Error")]
    InternalError,
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::DbError(e.to_string())
    }
}
