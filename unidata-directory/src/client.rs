//! HTTP client for the university directory provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use unidata_core::constants::DEFAULT_PROVIDER_URL;
use unidata_core::error::{Result, UnidataError};

/// Directory client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the provider (e.g. "http://universities.hipolabs.com")
    pub base_url: String,
    /// Request timeout in seconds. `None` leaves the request unbounded;
    /// a hung provider then blocks the request that hit it.
    pub timeout_seconds: Option<u64>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl DirectoryConfig {
    /// Creates a config pointing at the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets a request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Client for the directory provider's search endpoint.
pub struct DirectoryClient {
    config: DirectoryConfig,
    http_client: reqwest::Client,
}

impl DirectoryClient {
    /// Creates a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: DirectoryConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http_client = builder.build().expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Queries the provider for records matching `term`.
    ///
    /// Issues `GET {base}/search?country={term}` and parses the body as
    /// JSON. The response status is not inspected: whatever body the
    /// provider sends is accepted as long as it parses. A body that does
    /// not parse is an `UpstreamDecode` error.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Value> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("country", term)])
            .send()
            .await
            .map_err(|e| UnidataError::Http(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| UnidataError::Http(e.to_string()))?;

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| UnidataError::UpstreamDecode(e.to_string()))?;

        debug!(term, "Provider responded with parseable JSON");
        Ok(value)
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DirectoryClient {
        DirectoryClient::with_config(DirectoryConfig::with_base_url(server.uri()))
    }

    #[tokio::test]
    async fn test_search_sends_term_as_country_query() {
        let server = MockServer::start().await;
        let records = json!([{"name": "Middle East Technical University", "country": "Turkey"}]);

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("country", "Turkey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&records))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server).search("Turkey").await.unwrap();
        assert_eq!(value, records);
    }

    #[tokio::test]
    async fn test_search_rejects_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).search("Turkey").await.unwrap_err();
        assert!(matches!(err, UnidataError::UpstreamDecode(_)));
    }

    #[tokio::test]
    async fn test_search_does_not_inspect_status() {
        // A non-2xx response with a JSON body is still a successful decode.
        let server = MockServer::start().await;
        let body = json!({"detail": "service unavailable"});

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503).set_body_json(&body))
            .mount(&server)
            .await;

        let value = client_for(&server).search("Turkey").await.unwrap();
        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn test_search_connection_failure_is_http_error() {
        // Bind a server, note its address, shut it down, then dial it.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = DirectoryClient::with_config(DirectoryConfig::with_base_url(uri));
        let err = client.search("Turkey").await.unwrap_err();
        assert!(matches!(err, UnidataError::Http(_)));
    }

    #[test]
    fn test_config_builder() {
        let config = DirectoryConfig::with_base_url("http://provider.test").with_timeout(5);
        assert_eq!(config.base_url, "http://provider.test");
        assert_eq!(config.timeout_seconds, Some(5));

        // Default carries no timeout at all.
        assert!(DirectoryConfig::default().timeout_seconds.is_none());
    }
}
