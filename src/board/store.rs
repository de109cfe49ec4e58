//! The board store for Anonboard.
//!
//! This is the canonical operation set over the thread collection; the
//! web layer is a thin adapter over these calls and holds no board
//! semantics of its own.
//!
//! Mutations of existing documents run as an optimistic load-mutate-write
//! cycle: the write is conditioned on the version marker the document was
//! read at, and a lost race re-loads and retries. A failed conditional
//! write implies another writer committed, so the cycle as a whole always
//! makes progress.

use tokio::task;
use tracing::debug;

use super::reply::{NewReply, Reply};
use super::repository::{ThreadRepository, VersionedThread};
use super::thread::{NewThread, Thread};
use super::view::{ThreadDetail, ThreadSummary};
use crate::password::{self, PasswordError};
use crate::{BoardError, Database, Result};

/// Maximum number of threads served by the board list view.
pub const THREAD_LIST_LIMIT: usize = 10;

/// Number of most-recent replies embedded in each list-view thread.
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Maximum length for board names (in characters).
pub const MAX_BOARD_LENGTH: usize = 50;

/// Maximum length for thread and reply text (in characters).
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Maximum length for delete passwords (in bytes).
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a board name.
fn validate_board(board: &str) -> Result<()> {
    if board.trim().is_empty() {
        return Err(BoardError::Validation("board is required".to_string()));
    }
    if board.chars().count() > MAX_BOARD_LENGTH {
        return Err(BoardError::Validation(format!(
            "board name too long ({MAX_BOARD_LENGTH} characters max)"
        )));
    }
    Ok(())
}

/// Validate thread/reply body text.
fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(BoardError::Validation("text is required".to_string()));
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(BoardError::Validation(format!(
            "text too long ({MAX_TEXT_LENGTH} characters max)"
        )));
    }
    Ok(())
}

/// Validate a delete password.
fn validate_delete_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(BoardError::Validation(
            "delete_password is required".to_string(),
        ));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(BoardError::Validation(format!(
            "delete_password too long ({MAX_PASSWORD_LENGTH} bytes max)"
        )));
    }
    Ok(())
}

/// Validate a required identifier field.
fn validate_id(id: &str, field: &str) -> Result<()> {
    if id.is_empty() {
        return Err(BoardError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Hash a delete password on the blocking pool.
///
/// Argon2 is CPU-bound; running it on the async executor would stall
/// unrelated requests' I/O.
async fn hash_on_blocking_pool(password: String) -> Result<String> {
    task::spawn_blocking(move || password::hash_delete_password(&password))
        .await
        .map_err(|e| BoardError::PasswordHash(e.to_string()))?
        .map_err(|e| BoardError::PasswordHash(e.to_string()))
}

/// Verify a delete password on the blocking pool.
async fn verify_on_blocking_pool(password: String, hash: String) -> Result<()> {
    let outcome = task::spawn_blocking(move || password::verify_delete_password(&password, &hash))
        .await
        .map_err(|e| BoardError::PasswordHash(e.to_string()))?;

    match outcome {
        Ok(()) => Ok(()),
        Err(PasswordError::VerificationFailed) => Err(BoardError::IncorrectPassword),
        Err(e) => Err(BoardError::PasswordHash(e.to_string())),
    }
}

/// Store for board operations.
///
/// Holds the database handle; constructed once at startup and shared by
/// the request handlers.
#[derive(Debug, Clone)]
pub struct BoardStore {
    db: Database,
}

impl BoardStore {
    /// Create a new store over an open database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn threads(&self) -> ThreadRepository<'_> {
        ThreadRepository::new(self.db.pool())
    }

    /// Load a thread scoped to a board, or fail with `NotFound`.
    async fn load(&self, board: &str, thread_id: &str) -> Result<VersionedThread> {
        self.threads()
            .get(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))
    }

    /// Create a new thread and return its ID.
    ///
    /// Nothing else is echoed back; in particular the password hash never
    /// leaves the store.
    pub async fn create_thread(&self, new: NewThread) -> Result<String> {
        validate_board(&new.board)?;
        validate_text(&new.text)?;
        validate_delete_password(&new.delete_password)?;

        let hash = hash_on_blocking_pool(new.delete_password).await?;
        let thread = Thread::new(new.board, new.text, hash);
        self.threads().insert(&thread).await?;

        debug!(thread_id = %thread.id, board = %thread.board, "thread created");
        Ok(thread.id)
    }

    /// Append a reply to a thread and return the reply's ID.
    ///
    /// The append and the bump of the parent's `bumped_on` are committed
    /// in one conditional document write, or not at all.
    pub async fn create_reply(&self, new: NewReply) -> Result<String> {
        validate_board(&new.board)?;
        validate_id(&new.thread_id, "thread_id")?;
        validate_text(&new.text)?;
        validate_delete_password(&new.delete_password)?;

        let hash = hash_on_blocking_pool(new.delete_password).await?;
        // The reply keeps one identity and timestamp across write retries
        let reply = Reply::new(new.text, hash);

        loop {
            let mut current = self.load(&new.board, &new.thread_id).await?;
            current.thread.push_reply(reply.clone());
            if self
                .threads()
                .write_back(&current.thread, current.version)
                .await?
            {
                debug!(thread_id = %new.thread_id, reply_id = %reply.id, "reply created");
                return Ok(reply.id);
            }
            debug!(thread_id = %new.thread_id, "lost reply append race, retrying");
        }
    }

    /// List up to [`THREAD_LIST_LIMIT`] threads for a board, most recently
    /// bumped first, each carrying at most [`REPLY_PREVIEW_LIMIT`] replies
    /// and the total reply count.
    pub async fn list_recent_threads(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        validate_board(board)?;

        let threads = self
            .threads()
            .list_by_board(board, THREAD_LIST_LIMIT as i64)
            .await?;

        Ok(threads
            .iter()
            .map(|t| ThreadSummary::from_thread(t, REPLY_PREVIEW_LIMIT))
            .collect())
    }

    /// Get a single thread with all of its replies, newest first.
    pub async fn get_thread(&self, board: &str, thread_id: &str) -> Result<ThreadDetail> {
        validate_board(board)?;
        validate_id(thread_id, "thread_id")?;

        let current = self.load(board, thread_id).await?;
        Ok(ThreadDetail::from_thread(&current.thread))
    }

    /// Flag a thread as reported. Idempotent.
    pub async fn report_thread(&self, board: &str, thread_id: &str) -> Result<()> {
        validate_board(board)?;
        validate_id(thread_id, "thread_id")?;

        loop {
            let mut current = self.load(board, thread_id).await?;
            if current.thread.reported {
                // Already flagged; reporting again is a no-op success
                return Ok(());
            }
            current.thread.reported = true;
            if self
                .threads()
                .write_back(&current.thread, current.version)
                .await?
            {
                return Ok(());
            }
            debug!(thread_id, "lost report race, retrying");
        }
    }

    /// Flag one embedded reply as reported. Idempotent.
    pub async fn report_reply(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        validate_board(board)?;
        validate_id(thread_id, "thread_id")?;
        validate_id(reply_id, "reply_id")?;

        loop {
            let mut current = self.load(board, thread_id).await?;
            let reply = current
                .thread
                .reply_mut(reply_id)
                .ok_or_else(|| BoardError::NotFound("reply".to_string()))?;
            if reply.reported {
                return Ok(());
            }
            reply.reported = true;
            if self
                .threads()
                .write_back(&current.thread, current.version)
                .await?
            {
                return Ok(());
            }
            debug!(thread_id, reply_id, "lost report race, retrying");
        }
    }

    /// Delete a thread and all of its replies, gated by the thread's
    /// delete password.
    ///
    /// This is a hard delete: no tombstone remains.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: &str,
        delete_password: &str,
    ) -> Result<()> {
        validate_board(board)?;
        validate_id(thread_id, "thread_id")?;
        validate_delete_password(delete_password)?;

        let current = self.load(board, thread_id).await?;
        verify_on_blocking_pool(
            delete_password.to_string(),
            current.thread.delete_password.clone(),
        )
        .await?;

        if !self.threads().delete(board, thread_id).await? {
            // A concurrent deleter won
            return Err(BoardError::NotFound("thread".to_string()));
        }

        debug!(thread_id, board, "thread deleted");
        Ok(())
    }

    /// Redact one embedded reply, gated by that reply's own delete
    /// password.
    ///
    /// The reply's text becomes the deletion sentinel; its ID, timestamp,
    /// and reported flag stay in place. Replies are never structurally
    /// removed from a thread.
    pub async fn redact_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        delete_password: &str,
    ) -> Result<()> {
        validate_board(board)?;
        validate_id(thread_id, "thread_id")?;
        validate_id(reply_id, "reply_id")?;
        validate_delete_password(delete_password)?;

        // Verify once against the reply's hash; the hash is immutable so
        // write retries below don't need to re-verify.
        let current = self.load(board, thread_id).await?;
        let reply = current
            .thread
            .reply(reply_id)
            .ok_or_else(|| BoardError::NotFound("reply".to_string()))?;
        verify_on_blocking_pool(delete_password.to_string(), reply.delete_password.clone())
            .await?;

        loop {
            let mut current = self.load(board, thread_id).await?;
            let reply = current
                .thread
                .reply_mut(reply_id)
                .ok_or_else(|| BoardError::NotFound("reply".to_string()))?;
            reply.redact();
            if self
                .threads()
                .write_back(&current.thread, current.version)
                .await?
            {
                debug!(thread_id, reply_id, "reply redacted");
                return Ok(());
            }
            debug!(thread_id, reply_id, "lost redact race, retrying");
        }
    }
}
