//! Thread document persistence for Anonboard.
//!
//! One row per thread; the embedded reply list is stored as a JSON
//! document in the `replies` column. Every write of an existing document
//! is conditioned on the row's `version` marker so that concurrent
//! read-modify-write cycles cannot lose updates.

use sqlx::FromRow;

use super::reply::Reply;
use super::thread::Thread;
use crate::datetime::{format_stored, parse_stored};
use crate::db::DbPool;
use crate::{BoardError, Result};

/// Raw row shape of the `threads` table.
#[derive(Debug, FromRow)]
struct ThreadRow {
    id: String,
    board: String,
    text: String,
    created_on: String,
    bumped_on: String,
    reported: bool,
    delete_password: String,
    replies: String,
    version: i64,
}

impl ThreadRow {
    fn into_versioned(self) -> Result<VersionedThread> {
        let replies: Vec<Reply> = serde_json::from_str(&self.replies)
            .map_err(|e| BoardError::Database(format!("corrupt reply document: {e}")))?;
        Ok(VersionedThread {
            version: self.version,
            thread: Thread {
                id: self.id,
                board: self.board,
                text: self.text,
                created_on: parse_stored(&self.created_on)?,
                bumped_on: parse_stored(&self.bumped_on)?,
                reported: self.reported,
                delete_password: self.delete_password,
                replies,
            },
        })
    }
}

/// A thread document together with the version marker it was read at.
#[derive(Debug, Clone)]
pub struct VersionedThread {
    /// The thread document.
    pub thread: Thread,
    /// Optimistic-concurrency marker; pass back to [`ThreadRepository::write_back`].
    pub version: i64,
}

const THREAD_COLUMNS: &str =
    "id, board, text, created_on, bumped_on, reported, delete_password, replies, version";

/// Repository for thread document operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a freshly created thread document.
    pub async fn insert(&self, thread: &Thread) -> Result<()> {
        let replies = serde_json::to_string(&thread.replies)
            .map_err(|e| BoardError::Database(format!("serialize replies: {e}")))?;

        sqlx::query(
            "INSERT INTO threads (id, board, text, created_on, bumped_on, reported, delete_password, replies, version)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0)",
        )
        .bind(&thread.id)
        .bind(&thread.board)
        .bind(&thread.text)
        .bind(format_stored(&thread.created_on))
        .bind(format_stored(&thread.bumped_on))
        .bind(thread.reported)
        .bind(&thread.delete_password)
        .bind(replies)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get a thread by ID, scoped to a board.
    ///
    /// A thread that exists under a different board is not visible here.
    pub async fn get(&self, board: &str, id: &str) -> Result<Option<VersionedThread>> {
        let sql = format!("SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1 AND board = $2");
        let row = sqlx::query_as::<_, ThreadRow>(&sql)
            .bind(id)
            .bind(board)
            .fetch_optional(self.pool)
            .await?;

        row.map(ThreadRow::into_versioned).transpose()
    }

    /// List threads in a board, most recently bumped first.
    pub async fn list_by_board(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let sql = format!(
            "SELECT {THREAD_COLUMNS} FROM threads
             WHERE board = $1 ORDER BY bumped_on DESC, id DESC LIMIT $2"
        );
        let rows = sqlx::query_as::<_, ThreadRow>(&sql)
            .bind(board)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter()
            .map(|row| row.into_versioned().map(|v| v.thread))
            .collect()
    }

    /// Write a mutated thread document back, conditioned on its version.
    ///
    /// Returns false when the row has been written by someone else since
    /// the document was read (or no longer exists); the caller re-loads
    /// and retries. Only the mutable fields are written: `board`, `text`,
    /// and `created_on` are immutable after creation.
    pub async fn write_back(&self, thread: &Thread, expected_version: i64) -> Result<bool> {
        let replies = serde_json::to_string(&thread.replies)
            .map_err(|e| BoardError::Database(format!("serialize replies: {e}")))?;

        let result = sqlx::query(
            "UPDATE threads
             SET bumped_on = $1, reported = $2, replies = $3, version = version + 1
             WHERE id = $4 AND version = $5",
        )
        .bind(format_stored(&thread.bumped_on))
        .bind(thread.reported)
        .bind(replies)
        .bind(&thread.id)
        .bind(expected_version)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a thread and its embedded replies, scoped to a board.
    ///
    /// Returns true if a thread was deleted, false if not found.
    pub async fn delete(&self, board: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM threads WHERE id = $1 AND board = $2")
            .bind(id)
            .bind(board)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = setup().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = Thread::new("general", "hello", "$hash$");
        repo.insert(&thread).await.unwrap();

        let loaded = repo.get("general", &thread.id).await.unwrap().unwrap();
        assert_eq!(loaded.version, 0);
        assert_eq!(loaded.thread.id, thread.id);
        assert_eq!(loaded.thread.text, "hello");
        assert_eq!(
            loaded.thread.created_on.timestamp_micros(),
            thread.created_on.timestamp_micros()
        );
        assert!(loaded.thread.replies.is_empty());
    }

    #[tokio::test]
    async fn test_get_is_board_scoped() {
        let db = setup().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = Thread::new("general", "hello", "$hash$");
        repo.insert(&thread).await.unwrap();

        assert!(repo.get("other", &thread.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_back_detects_conflict() {
        let db = setup().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = Thread::new("general", "hello", "$hash$");
        repo.insert(&thread).await.unwrap();

        let mut first = repo.get("general", &thread.id).await.unwrap().unwrap();
        let mut second = repo.get("general", &thread.id).await.unwrap().unwrap();

        first.thread.push_reply(Reply::new("one", "$hash$"));
        assert!(repo.write_back(&first.thread, first.version).await.unwrap());

        // The second writer read version 0 which no longer exists
        second.thread.push_reply(Reply::new("two", "$hash$"));
        assert!(!repo.write_back(&second.thread, second.version).await.unwrap());

        // Re-load and retry succeeds
        let mut retry = repo.get("general", &thread.id).await.unwrap().unwrap();
        assert_eq!(retry.version, 1);
        retry.thread.push_reply(Reply::new("two", "$hash$"));
        assert!(repo.write_back(&retry.thread, retry.version).await.unwrap());

        let final_state = repo.get("general", &thread.id).await.unwrap().unwrap();
        assert_eq!(final_state.thread.reply_count(), 2);
    }

    #[tokio::test]
    async fn test_list_orders_by_bump() {
        let db = setup().await;
        let repo = ThreadRepository::new(db.pool());

        let mut first = Thread::new("general", "first", "$hash$");
        let mut second = Thread::new("general", "second", "$hash$");
        second.created_on = first.created_on + chrono::Duration::seconds(1);
        second.bumped_on = second.created_on;
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let listed = repo.list_by_board("general", 10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "second");

        // Bumping the first thread moves it to the front
        first.bumped_on = second.bumped_on + chrono::Duration::seconds(1);
        assert!(repo.write_back(&first, 0).await.unwrap());

        let listed = repo.list_by_board("general", 10).await.unwrap();
        assert_eq!(listed[0].text, "first");
    }

    #[tokio::test]
    async fn test_list_respects_limit_and_board() {
        let db = setup().await;
        let repo = ThreadRepository::new(db.pool());

        for i in 0..4 {
            let thread = Thread::new("general", format!("t{i}"), "$hash$");
            repo.insert(&thread).await.unwrap();
        }
        repo.insert(&Thread::new("other", "elsewhere", "$hash$"))
            .await
            .unwrap();

        let listed = repo.list_by_board("general", 2).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|t| t.board == "general"));
    }

    #[tokio::test]
    async fn test_delete_is_hard_and_board_scoped() {
        let db = setup().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = Thread::new("general", "hello", "$hash$");
        repo.insert(&thread).await.unwrap();

        assert!(!repo.delete("other", &thread.id).await.unwrap());
        assert!(repo.delete("general", &thread.id).await.unwrap());
        assert!(repo.get("general", &thread.id).await.unwrap().is_none());
        assert!(!repo.delete("general", &thread.id).await.unwrap());
    }
}
