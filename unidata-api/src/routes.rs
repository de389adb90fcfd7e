//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Fixed greeting
        .route("/", get(handlers::home))
        // The lookup proxy
        .route("/unidata/:key", get(handlers::lookup))
        // Health check
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
