//! Typed API port and the REST error taxonomy
//!
//! `ApiPort` is generic over request/response types and therefore not
//! object-safe; the application layer implements it on top of [`RawApiPort`]
//! (see `application::api::Api`). Services stay generic over `A: ApiPort` so
//! tests can substitute a scripted port.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors crossing the HTTP boundary.
///
/// A non-2xx response carries the response body text as its detail (or a
/// generic message when the body is empty) so callers can surface it
/// verbatim in a user-facing alert. No distinction is drawn between 4xx and
/// 5xx beyond the recorded status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; `detail` is the body text or a generic message.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// Transport-level failure (connection refused, DNS, broken pipe).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded as the expected type.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let detail = if trimmed.is_empty() {
            format!("Request failed with status {status}")
        } else {
            trimmed.to_string()
        };
        Self::Status { status, detail }
    }
}

/// Typed HTTP access for application services.
///
/// One call per (resource, verb) pair; no retries, no caching, no in-flight
/// deduplication. Credentials (session cookies) flow on every call.
#[async_trait]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    /// POST with no request or response body (logout).
    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_keeps_body_text() {
        let err = ApiError::from_response(404, "campaign not found");
        assert_eq!(err.to_string(), "campaign not found");
    }

    #[test]
    fn test_from_response_empty_body_gets_generic_message() {
        let err = ApiError::from_response(500, "  \n");
        assert_eq!(err.to_string(), "Request failed with status 500");
    }
}
