//! Served views of threads and replies.
//!
//! View types are the only thread/reply shapes that leave the store.
//! Password hashes and `reported` flags are stripped at both the thread
//! and the reply level; replies are always served most-recent-first.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::reply::Reply;
use super::thread::Thread;

/// Reply as served to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyView {
    /// Reply ID.
    pub id: String,
    /// Reply text (the redaction sentinel once redacted).
    pub text: String,
    /// Reply creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.clone(),
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

/// Embedded replies sorted by creation time, most recent first.
///
/// The sort is stable, so replies sharing a timestamp keep their
/// insertion order relative to each other.
fn sorted_views(replies: &[Reply]) -> Vec<ReplyView> {
    let mut refs: Vec<&Reply> = replies.iter().collect();
    refs.sort_by(|a, b| b.created_on.cmp(&a.created_on));
    refs.into_iter().map(ReplyView::from).collect()
}

/// Thread as served in the board list view.
///
/// Carries only the most recent replies up to the preview limit, while
/// `replycount` reports the total the thread actually has.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadSummary {
    /// Thread ID.
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread body text.
    pub text: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last-activity timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Most recent replies, newest first, truncated to the preview limit.
    pub replies: Vec<ReplyView>,
    /// Total number of replies, computed before truncation.
    pub replycount: usize,
}

impl ThreadSummary {
    /// Build a summary view, truncating replies to `preview_limit`.
    pub fn from_thread(thread: &Thread, preview_limit: usize) -> Self {
        // Total must be taken before the preview slice
        let replycount = thread.reply_count();
        let mut replies = sorted_views(&thread.replies);
        replies.truncate(preview_limit);
        Self {
            id: thread.id.clone(),
            board: thread.board.clone(),
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies,
            replycount,
        }
    }
}

/// Thread as served in the single-thread view: every reply, untruncated.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetail {
    /// Thread ID.
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread body text.
    pub text: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last-activity timestamp.
    pub bumped_on: DateTime<Utc>,
    /// All replies, newest first.
    pub replies: Vec<ReplyView>,
    /// Total number of replies (equals `replies.len()` here).
    pub replycount: usize,
}

impl ThreadDetail {
    /// Build the full view of a thread.
    pub fn from_thread(thread: &Thread) -> Self {
        let replies = sorted_views(&thread.replies);
        Self {
            id: thread.id.clone(),
            board: thread.board.clone(),
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replycount: replies.len(),
            replies,
        }
    }
}
