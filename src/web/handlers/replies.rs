//! Reply handlers for the web API.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::{NewReply, ThreadDetail};
use crate::web::dto::{
    CreateReplyRequest, RedactReplyRequest, ReportReplyRequest, ThreadQuery, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::{AppState, SUCCESS_BODY};

/// POST /api/replies/:board - Append a reply to a thread.
///
/// Acknowledges with a redirect to the thread page.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateReplyRequest>,
) -> Result<Redirect, ApiError> {
    // A board in the body overrides the URL parameter
    let board = req.board.unwrap_or(board);
    let thread_id = req.thread_id;

    state
        .store
        .create_reply(NewReply::new(
            board.as_str(),
            thread_id.as_str(),
            req.text,
            req.delete_password,
        ))
        .await?;

    Ok(Redirect::to(&format!("/b/{board}/{thread_id}")))
}

/// GET /api/replies/:board?thread_id=… - Fetch one thread with all replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadDetail>, ApiError> {
    let thread_id = query.thread_id.ok_or_else(ApiError::bad_request)?;
    let thread = state.store.get_thread(&board, &thread_id).await?;
    Ok(Json(thread))
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    state
        .store
        .report_reply(&board, &req.thread_id, &req.reply_id)
        .await?;
    Ok(SUCCESS_BODY)
}

/// DELETE /api/replies/:board - Redact a reply, gated by its password.
pub async fn redact_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<RedactReplyRequest>,
) -> Result<&'static str, ApiError> {
    state
        .store
        .redact_reply(&board, &req.thread_id, &req.reply_id, &req.delete_password)
        .await?;
    Ok(SUCCESS_BODY)
}
