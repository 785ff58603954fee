//! Error types for sangay.

use thiserror::Error;

/// Errors produced anywhere in sangay.
#[derive(Debug, Error)]
pub enum SangayError {
    /// A timer configuration was rejected at construction time.
    #[error("Invalid timer configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration, path resolution or terminal setup failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// The requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input was rejected.
    #[error("{0}")]
    Validation(String),

    /// Serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SangayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for SangayError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for SangayError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_bare() {
        let err = SangayError::Validation("Please write something before saving".to_string());
        assert_eq!(err.to_string(), "Please write something before saving");
    }

    #[test]
    fn test_from_json_error() {
        let err: SangayError = serde_json::from_str::<i32>("nope").unwrap_err().into();
        assert!(matches!(err, SangayError::Parse(_)));
    }
}
