//! Test helpers for web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use anonboard::board::BoardStore;
use anonboard::web::handlers::AppState;
use anonboard::web::router::create_router;
use anonboard::Database;

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let app_state = Arc::new(AppState::new(BoardStore::new(db)));
    let router = create_router(app_state, &[]);
    TestServer::new(router).expect("Failed to create test server")
}

/// Create a thread via the API and return its ID.
///
/// Creation responds with a redirect, so the ID is looked up through the
/// board list by matching the thread text.
pub async fn create_thread(server: &TestServer, board: &str, text: &str, password: &str) -> String {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let list: Value = server.get(&format!("/api/threads/{board}")).await.json();
    list.as_array()
        .expect("thread list is an array")
        .iter()
        .find(|t| t["text"] == text)
        .unwrap_or_else(|| panic!("created thread {text:?} not listed"))["id"]
        .as_str()
        .expect("thread id is a string")
        .to_string()
}

/// Append a reply via the API and return its ID.
pub async fn create_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> String {
    let response = server
        .post(&format!("/api/replies/{board}"))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let detail = get_thread(server, board, thread_id).await;
    detail["replies"]
        .as_array()
        .expect("replies is an array")
        .iter()
        .find(|r| r["text"] == text)
        .unwrap_or_else(|| panic!("created reply {text:?} not served"))["id"]
        .as_str()
        .expect("reply id is a string")
        .to_string()
}

/// Fetch the full single-thread view as JSON.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> Value {
    let response = server
        .get(&format!("/api/replies/{board}"))
        .add_query_param("thread_id", thread_id)
        .await;
    response.assert_status_ok();
    response.json()
}

/// Fetch the board list view as JSON.
pub async fn list_threads(server: &TestServer, board: &str) -> Value {
    let response = server.get(&format!("/api/threads/{board}")).await;
    response.assert_status_ok();
    response.json()
}
