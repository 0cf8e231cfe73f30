//! HTTP client for the comparison backend.
//!
//! Two routes are consumed:
//! - `GET /compare/{handle}`: the comparison itself
//! - `GET /`: a greeting, used by `--check` to see if the server is up
//!
//! The handle is pasted into the path as-is. No percent-encoding is done here,
//! so a handle containing `/` or `?` changes the URL's meaning.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use super::{ApiError, CompareBackend};

/// Body of `GET /`.
#[derive(Deserialize, Debug)]
struct Greeting {
    message: String,
}

/// Comparison backend reached over HTTP.
pub struct CompareClient {
    base_url: String,
    client: reqwest::Client,
}

impl CompareClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `<base>/compare/<handle>` by plain interpolation.
    pub fn compare_url(&self, handle: &str) -> String {
        format!("{}/compare/{}", self.base_url, handle)
    }

    /// Fetches the server greeting from `GET /`.
    pub async fn greeting(&self) -> Result<String, ApiError> {
        let url = format!("{}/", self.base_url);
        debug!("Greeting request: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Greeting failed: {} - {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let greeting: Greeting = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(greeting.message)
    }
}

#[async_trait]
impl CompareBackend for CompareClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn compare(&self, handle: &str) -> Result<Value, ApiError> {
        let url = self.compare_url(handle);
        info!("Comparison request: GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Comparison response status: {}", status);

        if !status.is_success() {
            // The server puts {"error": "..."} in 500 bodies; keep it for the log
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Comparison API error: {} - {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
