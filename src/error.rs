// src/error.rs
// Error types surfaced to callers of the journal library

use thiserror::Error;

/// Main error type for the emotions library.
///
/// Generation failures never show up here: every pipeline stage absorbs its
/// own [`GenerationError`](crate::llm::GenerationError) and substitutes a
/// fallback value.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;

impl JournalError {
    /// Whether the error points at credential/environment setup
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = JournalError::Config("GROQ_API_KEY not set".to_string());
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("GROQ_API_KEY"));
        assert!(err.is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: JournalError = io_err.into();
        assert!(matches!(err, JournalError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: JournalError = json_err.into();
        assert!(matches!(err, JournalError::Json(_)));
        assert!(err.to_string().contains("JSON"));
    }
}
