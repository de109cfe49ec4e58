//! Anonboard - Anonymous Message Board
//!
//! An anonymous message-board backend: clients create discussion threads
//! under named boards, attach replies to threads, and optionally report
//! or password-protect deletion of either. Threads embed their replies
//! as a nested document; all board semantics live in
//! [`board::BoardStore`], with a thin axum adapter on top.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod password;
pub mod web;

pub use board::{
    BoardStore, NewReply, NewThread, Reply, ReplyView, Thread, ThreadDetail, ThreadSummary,
    DELETED_REPLY_TEXT,
};
pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
pub use password::{hash_delete_password, verify_delete_password, PasswordError};
pub use web::WebServer;
