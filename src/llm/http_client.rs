// src/llm/http_client.rs
// Shared HTTP client configuration for completion providers

use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use super::GenerationError;

/// HTTP client with fixed timeouts. One attempt per request, no retries.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            request_timeout,
            connect_timeout,
        }
    }

    /// POST a JSON body with Bearer auth and return the response body text
    pub async fn execute(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = %status,
                error = %error_body,
                "Completion request rejected"
            );
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Ok(response.text().await?)
    }
}
