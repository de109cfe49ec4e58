//! Thread handlers for the web API.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::{NewThread, ThreadSummary};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::{AppState, SUCCESS_BODY};

/// POST /api/threads/:board - Create a new thread.
///
/// Acknowledges with a redirect to the board page, echoing no content.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateThreadRequest>,
) -> Result<Redirect, ApiError> {
    // A board in the body overrides the URL parameter
    let board = req.board.unwrap_or(board);

    state
        .store
        .create_thread(NewThread::new(board.as_str(), req.text, req.delete_password))
        .await?;

    Ok(Redirect::to(&format!("/b/{board}/")))
}

/// GET /api/threads/:board - List recent threads in a board.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadSummary>>, ApiError> {
    let threads = state.store.list_recent_threads(&board).await?;
    Ok(Json(threads))
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    state.store.report_thread(&board, &req.thread_id).await?;
    Ok(SUCCESS_BODY)
}

/// DELETE /api/threads/:board - Delete a thread, gated by its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    state
        .store
        .delete_thread(&board, &req.thread_id, &req.delete_password)
        .await?;
    Ok(SUCCESS_BODY)
}
