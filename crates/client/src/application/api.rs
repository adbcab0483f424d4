//! Typed API wrapper for application services.
//!
//! Application services are generic over the `ApiPort` trait, which is not
//! object-safe (generic methods). The composition root stores an object-safe
//! [`RawApiPort`] implementation; `Api` wraps it and implements the typed
//! `ApiPort` interface via serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[async_trait]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.raw.post_empty(path).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let value = self.raw.put_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::ScriptedApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_deserializes_into_requested_type() {
        let scripted = Arc::new(ScriptedApi::new());
        scripted.push_ok(json!({"answer": 42}));
        let api = Api::new(scripted.clone());

        #[derive(serde::Deserialize)]
        struct Answer {
            answer: u32,
        }

        let answer: Answer = api.get("/api/answer").await.expect("scripted ok");
        assert_eq!(answer.answer, 42);
        assert_eq!(scripted.calls()[0].path, "/api/answer");
    }

    #[tokio::test]
    async fn test_get_wraps_decode_failures_as_parse_errors() {
        let scripted = Arc::new(ScriptedApi::new());
        scripted.push_ok(json!("not an object"));
        let api = Api::new(scripted);

        #[derive(serde::Deserialize)]
        struct Answer {
            #[allow(dead_code)]
            answer: u32,
        }

        let result: Result<Answer, _> = api.get("/api/answer").await;
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
