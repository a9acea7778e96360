// src/llm/groq.rs
// Groq chat completions client (OpenAI-compatible, non-streaming)

use crate::config::EnvConfig;
use crate::llm::http_client::LlmHttpClient;
use crate::llm::openai_compat::{ChatRequest, parse_chat_response};
use crate::llm::provider::LlmClient;
use crate::llm::{GenerationError, GenerationRequest};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

/// Groq API client
pub struct GroqClient {
    api_key: String,
    base_url: String,
    http: LlmHttpClient,
}

impl GroqClient {
    /// Create a client from environment configuration.
    ///
    /// Fails before any network activity when the credential is missing or
    /// still the placeholder.
    pub fn from_config(config: &EnvConfig) -> crate::error::Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        info!(base_url = %config.base_url, model = %config.model, "Initializing Groq client");
        Ok(Self::with_endpoint(
            api_key,
            config.base_url.clone(),
            config.request_timeout,
            config.connect_timeout,
        ))
    }

    /// Create a client against an explicit endpoint
    pub fn with_endpoint(
        api_key: String,
        base_url: String,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            api_key,
            base_url,
            http: LlmHttpClient::new(request_timeout, connect_timeout),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, request), fields(request_id, model = %request.model))]
    async fn complete(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();
        Span::current().record("request_id", &request_id);

        let body = serde_json::to_string(&ChatRequest::from(request))
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;
        debug!(request_id = %request_id, "Groq request: {}", body);

        let response_body = self
            .http
            .execute(&request_id, &self.base_url, &self.api_key, body)
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let result = parse_chat_response(&response_body, &request_id, duration_ms)?;

        if let Some(ref u) = result.usage {
            crate::llm::logging::log_usage(&result.request_id, "Groq", u);
        }
        crate::llm::logging::log_completion(&result, "Groq");

        result.into_text()
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.complete(request).await
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}
