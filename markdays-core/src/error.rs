//! Error types for markdays.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in markdays operations.
#[derive(Error, Debug)]
pub enum MarkdaysError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),
}

/// Failure reported by a persistence store.
///
/// Displays as the bare description so it can be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::new(err.to_string())
    }
}

/// Result type alias for markdays operations.
pub type MarkdaysResult<T> = Result<T, MarkdaysError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
