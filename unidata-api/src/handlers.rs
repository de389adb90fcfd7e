//! API route handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use unidata_core::constants::HOME_GREETING;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /
pub async fn home() -> Json<&'static str> {
    Json(HOME_GREETING)
}

/// GET /unidata/:key
///
/// The key is the raw path segment, used verbatim as the cache key and as
/// the provider query term. The success body is the provider's JSON.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Value>> {
    let value = state.lookup.lookup(&key).await?;
    Ok(Json(value))
}

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// GET /health
pub async fn health_check(State(_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: start.elapsed().as_secs(),
    })
}
