//! Quote backend API client
//!
//! reqwest-backed implementation of the three remote operations, including
//! HTTP client setup, response parsing, and error mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::settings::ApiConfig;
use crate::models::{
    PropertyCreateRequest, QuoteCreateRequest, QuoteResponse, RegisterUserRequest,
    RegisteredUser,
};
use crate::models::api::CreatedProperty;
use crate::services::submission::QuoteBackend;
use crate::utils::errors::{ApiError, ApiResult, QuoteFlowError, Result};

/// HTTP client for the quote backend API
#[derive(Debug, Clone)]
pub struct QuoteApiClient {
    client: Client,
    base_url: String,
}

impl QuoteApiClient {
    /// Create a new QuoteApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("QuoteFlow/1.0")
            .build()
            .map_err(QuoteFlowError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body and parse a JSON response
    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending quote API request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout
                } else if e.is_connect() {
                    ApiError::ServiceUnavailable
                } else {
                    ApiError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl QuoteBackend for QuoteApiClient {
    async fn register_user(&self, request: RegisterUserRequest) -> ApiResult<RegisteredUser> {
        self.post_json("/users", &request).await
    }

    async fn create_property(
        &self,
        user_id: &str,
        request: PropertyCreateRequest,
    ) -> ApiResult<CreatedProperty> {
        self.post_json(&format!("/users/{}/properties", user_id), &request)
            .await
    }

    async fn create_quote(
        &self,
        user_id: &str,
        request: QuoteCreateRequest,
    ) -> ApiResult<QuoteResponse> {
        self.post_json(&format!("/users/{}/quotes", user_id), &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            coverage_type: "homeowners".to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = QuoteApiClient::new(&test_config("http://localhost:8080/api/")).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/api");

        let client = QuoteApiClient::new(&test_config("http://localhost:8080/api")).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/api");
    }
}
