//! Error types for Diary core operations.
//!
//! Reads from storage fail soft and never surface here; these errors come
//! from writes, input validation and the purchase provider.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Key-value backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encoding or decoding of a stored value failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid caller input (malformed date, out-of-range month)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// In-app purchase provider error
    #[error("Purchase error: {0}")]
    Purchase(String),
}

impl From<std::io::Error> for DiaryError {
    fn from(err: std::io::Error) -> Self {
        DiaryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DiaryError {
    fn from(err: serde_json::Error) -> Self {
        DiaryError::Serialization(err.to_string())
    }
}
