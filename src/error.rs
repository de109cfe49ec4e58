//! Error types for Anonboard.

use thiserror::Error;

/// Common error type for Anonboard.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// This is a generic persistence error that wraps errors from the
    /// database backend. Errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Delete password does not match the stored hash.
    ///
    /// Kept separate from other failures so callers can report
    /// "incorrect password" instead of a generic error.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Password hashing backend failure.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for Anonboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = BoardError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn test_validation_error_display() {
        let err = BoardError::Validation("text is required".to_string());
        assert_eq!(err.to_string(), "validation error: text is required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = BoardError::NotFound("thread".to_string());
        assert_eq!(err.to_string(), "thread not found");
    }

    #[test]
    fn test_incorrect_password_display() {
        let err = BoardError::IncorrectPassword;
        assert_eq!(err.to_string(), "incorrect password");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(BoardError::IncorrectPassword)
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
