//! Web API module for Anonboard.
//!
//! A thin adapter translating HTTP requests into board-store calls and
//! store results into plain-text/JSON responses. No board semantics
//! live here.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
