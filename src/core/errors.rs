//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Input text was empty or whitespace-only; no request was sent
    #[error("Please enter text to translate")]
    EmptyInput,

    /// Backend answered with a non-success status
    #[error("API returned {status}: {body}")]
    HttpFailure {
        /// Numeric HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Transport-level failure (connect, DNS, timeout, body read)
    #[error("Network error: {message}")]
    NetworkFailure {
        /// Underlying transport error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Whether the failure was raised before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(self, TranslationError::EmptyInput)
    }

    /// HTTP status of a failed exchange, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslationError::HttpFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::NetworkFailure {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_failure_message() {
        let err = TranslationError::HttpFailure {
            status: 500,
            body: r#"{"error":"overloaded"}"#.to_string(),
        };

        assert_eq!(err.to_string(), r#"API returned 500: {"error":"overloaded"}"#);
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_empty_input_is_validation() {
        assert!(TranslationError::EmptyInput.is_validation());
        assert_eq!(TranslationError::EmptyInput.status(), None);
    }
}
