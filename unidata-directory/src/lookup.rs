//! Cache-aside lookup over the directory provider.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument};

use unidata_core::constants::DEFAULT_CACHE_TTL_SECS;
use unidata_core::error::{Result, UnidataError};
use unidata_core::traits::CacheStore;

use crate::client::{DirectoryClient, DirectoryConfig};

/// Lookup service configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Provider client configuration
    pub provider: DirectoryConfig,
    /// Cache TTL in seconds
    pub cache_ttl_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            provider: DirectoryConfig::default(),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl LookupConfig {
    /// Creates a config with the given provider base URL.
    pub fn with_provider_url(base_url: impl Into<String>) -> Self {
        Self {
            provider: DirectoryConfig::with_base_url(base_url),
            ..Default::default()
        }
    }

    /// Overrides the cache TTL.
    pub fn with_ttl_seconds(mut self, seconds: u64) -> Self {
        self.cache_ttl_seconds = seconds;
        self
    }
}

/// Cache-aside lookup over the directory provider.
///
/// Each call is a stateless two-branch decision:
/// 1. The store has a fresh entry for the key — parse it and return it,
///    without touching the provider.
/// 2. It does not — query the provider, cache the parsed response under
///    the key with the configured TTL, and return it.
///
/// Keys are passed through verbatim. Concurrent misses for the same key
/// are not coalesced: each fetches and each writes, last write wins.
pub struct LookupService {
    client: DirectoryClient,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl LookupService {
    /// Creates a service over the given store with default configuration.
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self::with_config(cache, LookupConfig::default())
    }

    /// Creates a service with custom configuration.
    pub fn with_config(cache: Arc<dyn CacheStore>, config: LookupConfig) -> Self {
        Self {
            client: DirectoryClient::with_config(config.provider.clone()),
            cache,
            ttl: Duration::from_secs(config.cache_ttl_seconds),
        }
    }

    /// Looks up records for `key`, from cache or from the provider.
    #[instrument(skip(self))]
    pub async fn lookup(&self, key: &str) -> Result<Value> {
        if let Some(cached) = self.cache.get(key).await? {
            debug!(key, "Cache hit");
            return serde_json::from_str(&cached)
                .map_err(|e| UnidataError::CacheDecode(e.to_string()));
        }

        debug!(key, "Cache miss, querying provider");

        let value = self.client.search(key).await?;

        let text = serde_json::to_string(&value)
            .map_err(|e| UnidataError::Store(e.to_string()))?;
        self.cache.set_ex(key, &text, self.ttl).await?;

        info!(key, "Fetched from provider and cached");
        Ok(value)
    }
}
