//! Request DTOs and validation for the Anonboard web API.
//!
//! Responses serialize the store's view types directly
//! ([`crate::board::ThreadSummary`], [`crate::board::ThreadDetail`]) —
//! those are already redacted for serving.

mod request;
mod validation;

pub use request::{
    CreateReplyRequest, CreateThreadRequest, DeleteThreadRequest, RedactReplyRequest,
    ReportReplyRequest, ReportThreadRequest, ThreadQuery,
};
pub use validation::ValidatedJson;
