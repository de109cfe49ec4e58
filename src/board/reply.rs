//! Reply model for Anonboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::datetime;

/// Sentinel text a redacted reply is left with.
///
/// Replies are never structurally removed from a thread; "deleting" one
/// replaces its text with this value and keeps the record in place.
pub const DELETED_REPLY_TEXT: &str = "[deleted]";

/// Reply embedded within exactly one thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Unique reply ID, assigned at creation.
    pub id: String,
    /// Reply text; mutable exactly once, via redaction.
    pub text: String,
    /// Reply creation timestamp.
    pub created_on: DateTime<Utc>,
    /// One-way moderation flag.
    pub reported: bool,
    /// Argon2 hash of the reply's own delete password, independent of
    /// the parent thread's.
    pub delete_password: String,
}

impl Reply {
    /// Create a new reply with a fresh ID and creation timestamp.
    pub fn new(text: impl Into<String>, delete_password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            created_on: datetime::now(),
            reported: false,
            delete_password: delete_password_hash.into(),
        }
    }

    /// Replace the text with the redaction sentinel.
    ///
    /// ID, timestamp, and reported flag stay untouched.
    pub fn redact(&mut self) {
        self.text = DELETED_REPLY_TEXT.to_string();
    }

    /// Check whether this reply has been redacted.
    pub fn is_redacted(&self) -> bool {
        self.text == DELETED_REPLY_TEXT
    }
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Name of the board the target thread belongs to.
    pub board: String,
    /// ID of the thread to reply to.
    pub thread_id: String,
    /// Reply text.
    pub text: String,
    /// Plain delete password; hashed by the store before persisting.
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply request with required fields.
    pub fn new(
        board: impl Into<String>,
        thread_id: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            thread_id: thread_id.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
