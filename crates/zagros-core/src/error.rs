//! Unified error types for the Zagros toolkit
//!
//! This module provides a common error type [`ZagrosError`] that can
//! represent errors from any part of the system. Domain-specific failures
//! are converted to `ZagrosError` for uniform handling at API boundaries.

use thiserror::Error;

/// Unified error type for all Zagros operations.
#[derive(Error, Debug)]
pub enum ZagrosError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors (unknown city, bad selection, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using ZagrosError.
pub type ZagrosResult<T> = Result<T, ZagrosError>;

impl From<anyhow::Error> for ZagrosError {
    fn from(err: anyhow::Error) -> Self {
        ZagrosError::Other(err.to_string())
    }
}

impl From<String> for ZagrosError {
    fn from(s: String) -> Self {
        ZagrosError::Other(s)
    }
}

impl From<&str> for ZagrosError {
    fn from(s: &str) -> Self {
        ZagrosError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for ZagrosError {
    fn from(err: serde_json::Error) -> Self {
        ZagrosError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZagrosError::Validation("year range inverted".into());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("year range inverted"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ZagrosError = io_err.into();
        assert!(matches!(err, ZagrosError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> ZagrosResult<()> {
            Err(ZagrosError::Config("test".into()))
        }

        fn outer() -> ZagrosResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
