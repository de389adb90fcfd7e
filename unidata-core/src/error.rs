//! Error types for unidata.
//!
//! A single `thiserror` hierarchy shared by the cache store, the upstream
//! client, and the lookup service. Variants carry enough context to log;
//! the API layer decides which of them map to fixed response bodies.

use thiserror::Error;

/// Result type alias using `UnidataError`.
pub type Result<T> = std::result::Result<T, UnidataError>;

/// Main error type for all unidata operations.
#[derive(Debug, Error)]
pub enum UnidataError {
    // ═══════════════════════════════════════════════════════════════════════════
    // DECODE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A cached entry could not be parsed as JSON.
    ///
    /// The service only ever writes JSON it serialized itself, so this
    /// indicates external corruption of the store.
    #[error("error decoding cached data: {0}")]
    CacheDecode(String),

    /// The provider's response body could not be parsed as JSON.
    #[error("error decoding data from provider: {0}")]
    UpstreamDecode(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // TRANSPORT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The cache store failed (connection, command, protocol).
    #[error("cache store error: {0}")]
    Store(String),

    /// The HTTP request to the provider failed before a body was read.
    #[error("HTTP request failed: {0}")]
    Http(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid configuration supplied at construction time.
    #[error("configuration error: {0}")]
    Config(String),
}

impl UnidataError {
    /// Returns true if this error carries a fixed, caller-visible detail
    /// string rather than a generic internal message.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            UnidataError::CacheDecode(_) | UnidataError::UpstreamDecode(_)
        )
    }

    /// Returns true if this error came from a collaborator being
    /// unreachable rather than returning bad data.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, UnidataError::Store(_) | UnidataError::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UnidataError::CacheDecode("expected value at line 1".into());
        assert!(err.to_string().contains("decoding cached data"));

        let err = UnidataError::Http("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_classification() {
        assert!(UnidataError::CacheDecode("bad".into()).is_decode_error());
        assert!(UnidataError::UpstreamDecode("bad".into()).is_decode_error());
        assert!(!UnidataError::Store("down".into()).is_decode_error());

        assert!(UnidataError::Store("down".into()).is_transport_error());
        assert!(UnidataError::Http("refused".into()).is_transport_error());
        assert!(!UnidataError::Config("bad url".into()).is_transport_error());
    }
}
