// src/llm/provider.rs
// Completion client abstraction used by the analysis stages

use async_trait::async_trait;

use super::{GenerationError, GenerationRequest};

/// Trait for text completion clients.
///
/// Implementations make at most one network attempt per call and never
/// retry; stages decide what to do on failure.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}
