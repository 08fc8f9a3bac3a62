//! Route definitions.
//!
//! A single status route; the router is built by a function so tests can
//! drive it directly without binding a socket.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Builds the application router.
pub fn router() -> Router {
    Router::new().route("/", get(index))
}

/// Fixed status payload confirming the service is up.
async fn index() -> Json<Value> {
    Json(json!({ "message": "Pipewright API is running" }))
}
