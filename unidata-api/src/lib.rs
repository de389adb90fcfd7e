//! # unidata API Server
//!
//! HTTP surface for the unidata lookup proxy.
//!
//! ## Endpoints
//!
//! - `GET /` - Fixed greeting
//! - `GET /unidata/:key` - Cached university directory lookup
//! - `GET /health` - Health check
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use unidata_api::{ApiConfig, ApiServer};
//! use unidata_cache::RedisStore;
//!
//! let config = ApiConfig::from_env();
//! let store = Arc::new(RedisStore::new(&config.redis_url)?);
//! let server = ApiServer::new(config, store);
//! server.run(([0, 0, 0, 0], 8081)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use unidata_core::traits::CacheStore;

/// API server for unidata.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration and cache
    /// store.
    pub fn new(config: ApiConfig, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            state: Arc::new(AppState::new(config, cache)),
        }
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("unidata API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
