//! Database schema and migrations for Anonboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Threads collection - one row per thread, replies embedded
    r#"
-- Threads table: the document collection backing the board store.
-- Each row is one thread document; replies are embedded as a JSON
-- array rather than joined from a separate table.
CREATE TABLE threads (
    id              TEXT PRIMARY KEY,
    board           TEXT NOT NULL,
    text            TEXT NOT NULL,
    created_on      TEXT NOT NULL,              -- RFC 3339 UTC, fixed width
    bumped_on       TEXT NOT NULL,              -- refreshed on every reply
    reported        INTEGER NOT NULL DEFAULT 0,
    delete_password TEXT NOT NULL,              -- Argon2 hash
    replies         TEXT NOT NULL DEFAULT '[]', -- embedded reply documents
    version         INTEGER NOT NULL DEFAULT 0  -- optimistic write marker
);

CREATE INDEX idx_threads_board_bumped ON threads(board, bumped_on DESC);
"#,
];
