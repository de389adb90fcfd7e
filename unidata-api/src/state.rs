//! App state: lookup service and config.

use std::sync::Arc;

use unidata_core::constants::{DEFAULT_PROVIDER_URL, DEFAULT_REDIS_URL};
use unidata_core::traits::CacheStore;
use unidata_directory::{DirectoryConfig, LookupConfig, LookupService};

/// Server configuration, normally read from the environment.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Redis connection URL for the cache store
    pub redis_url: String,
    /// Base URL of the directory provider
    pub provider_url: String,
    /// Optional upstream request timeout in seconds
    pub upstream_timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.into(),
            provider_url: DEFAULT_PROVIDER_URL.into(),
            upstream_timeout_seconds: None,
        }
    }
}

impl ApiConfig {
    /// Builds the config from environment variables, falling back to the
    /// defaults. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            redis_url: std::env::var("UNIDATA_REDIS_URL")
                .unwrap_or_else(|_| DEFAULT_REDIS_URL.into()),
            provider_url: std::env::var("UNIDATA_PROVIDER_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.into()),
            upstream_timeout_seconds: std::env::var("UNIDATA_UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}

/// Shared state for all request handlers.
pub struct AppState {
    /// The configuration the server was built with
    pub config: ApiConfig,
    /// The cache-aside lookup service
    pub lookup: LookupService,
}

impl AppState {
    /// Assembles the state from a config and an already-constructed cache
    /// store. The store is injected so tests can substitute an in-memory
    /// implementation.
    pub fn new(config: ApiConfig, cache: Arc<dyn CacheStore>) -> Self {
        let mut provider = DirectoryConfig::with_base_url(&config.provider_url);
        if let Some(secs) = config.upstream_timeout_seconds {
            provider = provider.with_timeout(secs);
        }

        let lookup_config = LookupConfig {
            provider,
            ..Default::default()
        };

        Self {
            config,
            lookup: LookupService::with_config(cache, lookup_config),
        }
    }
}
