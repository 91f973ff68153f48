//! Error types for the memline ecosystem.

use thiserror::Error;

/// Errors that can occur in memline operations.
#[derive(Error, Debug)]
pub enum MemlineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Storage credentials missing or invalid")]
    CredentialsMissing,

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Row {row} has only {fields} of 8 expected fields")]
    MalformedRow { row: usize, fields: usize },

    #[error("Invalid event date: {year}-{month}-{day}")]
    InvalidEventDate {
        year: String,
        month: String,
        day: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for memline operations.
pub type MemlineResult<T> = Result<T, MemlineError>;
