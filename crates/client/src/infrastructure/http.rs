//! HTTP adapter for the REST engine
//!
//! Implements [`RawApiPort`] with reqwest. The cookie store is enabled so the
//! engine's session cookie flows on every call. There are no retries,
//! timeouts, caches, or in-flight deduplication; a hung call keeps its editor
//! in flight until the transport gives up.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default engine address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// The base URL could not be parsed.
#[derive(Debug, Error)]
#[error("Invalid base URL '{url}': {source}")]
pub struct InvalidBaseUrl {
    url: String,
    #[source]
    source: url::ParseError,
}

/// Explicit client configuration handed to the REST layer at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a configuration from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBaseUrl`] when the string is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, InvalidBaseUrl> {
        Url::parse(base_url).map_err(|source| InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read the base URL from `LOREKEEPR_API_URL`, falling back to the
    /// default engine address.
    pub fn from_env() -> Result<Self, InvalidBaseUrl> {
        let base_url =
            std::env::var("LOREKEEPR_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// reqwest-backed [`RawApiPort`] adapter.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response into [`ApiError::Status`], carrying the body
    /// text as the error detail.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl RawApiPort for HttpApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(Self::check(response).await?).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(Self::check(response).await?).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(Self::check(response).await?).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3000/").expect("valid url");
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_config_rejects_relative_urls() {
        assert!(ClientConfig::new("/api").is_err());
        assert!(ClientConfig::new("localhost").is_err());
    }

    #[test]
    fn test_default_config_points_at_local_engine() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let api = HttpApi::new(ClientConfig::default());
        assert_eq!(
            api.url("/api/campaigns/abc"),
            "http://localhost:3000/api/campaigns/abc"
        );
    }
}
