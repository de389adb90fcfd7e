//! Common traits for unidata.
//!
//! These traits define the interfaces that different implementations can
//! satisfy, enabling modularity and testing.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for the key-value store backing the lookup cache.
///
/// Implementations might use:
/// - Redis (for production)
/// - In-memory storage (for testing/development)
///
/// Keys are used verbatim: no trimming, no case folding. Two keys that
/// differ only in case address two distinct entries.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent or its entry has expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key` with the given time-to-live.
    ///
    /// Overwrites any existing entry and resets its expiry.
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
}
