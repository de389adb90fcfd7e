//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use unidata_core::error::UnidataError;

/// Detail string for a cache entry that failed to parse.
pub const DETAIL_CACHE_DECODE: &str = "Error decoding cached data";

/// Detail string for a provider response that failed to parse.
pub const DETAIL_UPSTREAM_DECODE: &str = "Error decoding data from API";

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Internal server error.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.detail,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<UnidataError> for ApiError {
    fn from(err: UnidataError) -> Self {
        match &err {
            UnidataError::CacheDecode(_) => {
                tracing::error!(error = %err, "Corrupt cache entry");
                ApiError::internal(DETAIL_CACHE_DECODE)
            }
            UnidataError::UpstreamDecode(_) => {
                tracing::error!(error = %err, "Unparseable provider response");
                ApiError::internal(DETAIL_UPSTREAM_DECODE)
            }
            _ => {
                tracing::error!(error = %err, "Internal error");
                ApiError::internal("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_map_to_fixed_details() {
        let api: ApiError = UnidataError::CacheDecode("eof".into()).into();
        assert_eq!(api.detail, DETAIL_CACHE_DECODE);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);

        let api: ApiError = UnidataError::UpstreamDecode("eof".into()).into();
        assert_eq!(api.detail, DETAIL_UPSTREAM_DECODE);
    }

    #[test]
    fn test_transport_errors_stay_generic() {
        let api: ApiError = UnidataError::Store("redis down".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        // The underlying message is logged, not leaked to the caller.
        assert!(!api.detail.contains("redis"));
    }
}
