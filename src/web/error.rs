//! API error handling for the Anonboard web adapter.
//!
//! The wire contract keeps the original board clients working: failures
//! are plain-text bodies, and the incorrect-password outcome is always
//! distinguishable from a generic error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::BoardError;

/// Plain-text body served for the incorrect-password outcome.
pub const INCORRECT_PASSWORD_BODY: &str = "incorrect password";

/// Plain-text body served for every other failure.
pub const GENERIC_ERROR_BODY: &str = "error";

/// API error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: &'static str,
}

impl ApiError {
    /// Create a bad request error (invalid or missing input).
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: GENERIC_ERROR_BODY,
        }
    }

    /// Create a not found error.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: GENERIC_ERROR_BODY,
        }
    }

    /// Create the incorrect-password error.
    pub fn incorrect_password() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            body: INCORRECT_PASSWORD_BODY,
        }
    }

    /// Create an internal server error.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: GENERIC_ERROR_BODY,
        }
    }

    /// HTTP status this error responds with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Plain-text body this error responds with.
    pub fn body(&self) -> &'static str {
        self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body)
    }
}

impl std::error::Error for ApiError {}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match &err {
            BoardError::Validation(_) => ApiError::bad_request(),
            BoardError::NotFound(_) => ApiError::not_found(),
            BoardError::IncorrectPassword => ApiError::incorrect_password(),
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(ApiError::bad_request().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::incorrect_password().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::internal().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_incorrect_password_stays_distinguishable() {
        let err: ApiError = BoardError::IncorrectPassword.into();
        assert_eq!(err.body(), INCORRECT_PASSWORD_BODY);
        assert_ne!(err.body(), GENERIC_ERROR_BODY);
    }

    #[test]
    fn test_board_error_mapping() {
        let err: ApiError = BoardError::Validation("text is required".into()).into();
        assert_eq!(err, ApiError::bad_request());

        let err: ApiError = BoardError::NotFound("thread".into()).into();
        assert_eq!(err, ApiError::not_found());

        let err: ApiError = BoardError::Database("boom".into()).into();
        assert_eq!(err, ApiError::internal());
    }
}
