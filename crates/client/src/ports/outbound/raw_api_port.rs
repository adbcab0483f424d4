//! Raw API Port - Object-safe HTTP boundary
//!
//! The typed `ApiPort` trait is generic over response/request types which
//! makes it not object-safe. The composition root needs an object-safe
//! abstraction that can be stored behind `Arc<dyn ...>`.
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters.
//! The application layer provides a typed wrapper that implements `ApiPort`
//! on top.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
