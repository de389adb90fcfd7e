//! Service constants for unidata.
//!
//! Defaults here are deployment-neutral; anything host-specific comes from
//! the environment or CLI flags instead.

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE LIFECYCLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Time-to-live for cached provider responses, in seconds.
///
/// Entries expire in the store after one day and are treated as absent on
/// the next read, which triggers a fresh upstream fetch. There is no manual
/// invalidation path.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;

// ═══════════════════════════════════════════════════════════════════════════════
// EXTERNAL COLLABORATORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default base URL of the university directory provider.
pub const DEFAULT_PROVIDER_URL: &str = "http://universities.hipolabs.com";

/// Default Redis connection URL for the cache store.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

// ═══════════════════════════════════════════════════════════════════════════════
// HTTP SURFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// Default port the API server listens on.
pub const DEFAULT_API_PORT: u16 = 8081;

/// Fixed payload returned by `GET /`.
pub const HOME_GREETING: &str = "hello worlds";
