//! Board module for Anonboard.
//!
//! Threads live under named boards and embed their replies; this module
//! owns the domain model, the document repository, and the store that
//! implements the board semantics (ordering, truncation, redaction, and
//! password-gated mutation).

mod reply;
mod repository;
mod store;
mod thread;
mod view;

pub use reply::{NewReply, Reply, DELETED_REPLY_TEXT};
pub use repository::{ThreadRepository, VersionedThread};
pub use store::{
    BoardStore, MAX_BOARD_LENGTH, MAX_PASSWORD_LENGTH, MAX_TEXT_LENGTH, REPLY_PREVIEW_LIMIT,
    THREAD_LIST_LIMIT,
};
pub use thread::{NewThread, Thread};
pub use view::{ReplyView, ThreadDetail, ThreadSummary};
