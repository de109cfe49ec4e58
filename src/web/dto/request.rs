//! Request DTOs for the Anonboard web API.

use serde::Deserialize;
use validator::Validate;

/// Create-thread request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    /// Board name override; the URL parameter is used when absent.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub board: Option<String>,
    /// Thread body text.
    #[validate(length(min = 1))]
    pub text: String,
    /// Delete password for the new thread.
    #[validate(length(min = 1))]
    pub delete_password: String,
}

/// Report-thread request.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportThreadRequest {
    /// ID of the thread to report.
    #[validate(length(min = 1))]
    pub thread_id: String,
}

/// Delete-thread request.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteThreadRequest {
    /// ID of the thread to delete.
    #[validate(length(min = 1))]
    pub thread_id: String,
    /// The thread's delete password.
    #[validate(length(min = 1))]
    pub delete_password: String,
}

/// Create-reply request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    /// Board name override; the URL parameter is used when absent.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub board: Option<String>,
    /// ID of the thread to reply to.
    #[validate(length(min = 1))]
    pub thread_id: String,
    /// Reply text.
    #[validate(length(min = 1))]
    pub text: String,
    /// Delete password for the new reply.
    #[validate(length(min = 1))]
    pub delete_password: String,
}

/// Report-reply request.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportReplyRequest {
    /// ID of the thread the reply belongs to.
    #[validate(length(min = 1))]
    pub thread_id: String,
    /// ID of the reply to report.
    #[validate(length(min = 1))]
    pub reply_id: String,
}

/// Redact-reply request.
#[derive(Debug, Deserialize, Validate)]
pub struct RedactReplyRequest {
    /// ID of the thread the reply belongs to.
    #[validate(length(min = 1))]
    pub thread_id: String,
    /// ID of the reply to redact.
    #[validate(length(min = 1))]
    pub reply_id: String,
    /// The reply's own delete password.
    #[validate(length(min = 1))]
    pub delete_password: String,
}

/// Query parameters for the single-thread view.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// ID of the thread to fetch.
    #[serde(default)]
    pub thread_id: Option<String>,
}
