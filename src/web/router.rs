//! Router configuration for the Anonboard web API.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_thread, get_thread, list_threads, redact_reply,
    report_reply, report_thread, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            post(create_thread)
                .get(list_threads)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            post(create_reply)
                .get(get_thread)
                .put(report_reply)
                .delete(redact_reply),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for unmatched routes.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
