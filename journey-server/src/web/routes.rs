//! HTTP route handlers.

use axum::{Json, Router, extract::State, routing::get};

use crate::domain::Connection;

use super::dto::StatusResponse;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/connections", get(connections))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current departure status: display state plus attributes.
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let derived = state.poller.status().await;
    Json(StatusResponse::new(state.poller.query(), derived))
}

/// The full current connection list.
async fn connections(State(state): State<AppState>) -> Json<Vec<Connection>> {
    Json(state.poller.connections().await)
}
