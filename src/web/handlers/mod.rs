//! API handlers for the Anonboard web adapter.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use crate::board::BoardStore;

/// Plain-text body served for successful mutations.
pub const SUCCESS_BODY: &str = "success";

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The board store.
    pub store: BoardStore,
}

impl AppState {
    /// Create the application state over a board store.
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }
}
