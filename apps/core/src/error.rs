use std::io;
use thiserror::Error;

/// Application-wide error type.
///
/// Classification itself never fails; these cover startup and the
/// request boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents a dataset that could not be parsed.
    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    /// Represents data validation errors (e.g., invalid request format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., bad environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}
