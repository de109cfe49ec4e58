//! Thread model for Anonboard.
//!
//! A thread is the unit of consistency: it owns its embedded replies and
//! every mutation of a reply goes through the owning thread document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reply::Reply;
use crate::datetime;

/// Thread document: a top-level post owning an ordered list of replies.
///
/// `delete_password` holds the Argon2 hash of the creation-time secret;
/// it never leaves the store (see the view types).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique thread ID, assigned at creation.
    pub id: String,
    /// Name of the board this thread belongs to.
    pub board: String,
    /// Body text. Threads are never edited, only reported or deleted.
    pub text: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last-activity timestamp; refreshed whenever a reply is appended.
    pub bumped_on: DateTime<Utc>,
    /// One-way moderation flag.
    pub reported: bool,
    /// Argon2 hash of the thread's delete password.
    pub delete_password: String,
    /// Embedded replies, in insertion order.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Create a new thread with a fresh ID and `bumped_on == created_on`.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password_hash: impl Into<String>,
    ) -> Self {
        let now = datetime::now();
        Self {
            id: Uuid::new_v4().to_string(),
            board: board.into(),
            text: text.into(),
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password: delete_password_hash.into(),
            replies: Vec::new(),
        }
    }

    /// Append a reply and refresh the bump timestamp in one step.
    ///
    /// `bumped_on` never moves backwards.
    pub fn push_reply(&mut self, reply: Reply) {
        self.bumped_on = self.bumped_on.max(reply.created_on);
        self.replies.push(reply);
    }

    /// Look up an embedded reply by ID.
    pub fn reply(&self, reply_id: &str) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == reply_id)
    }

    /// Look up an embedded reply by ID, mutably.
    pub fn reply_mut(&mut self, reply_id: &str) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == reply_id)
    }

    /// Total number of replies, independent of any view truncation.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Name of the board to create the thread in.
    pub board: String,
    /// Body text.
    pub text: String,
    /// Plain delete password; hashed by the store before persisting.
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread request with required fields.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
