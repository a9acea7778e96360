// src/llm/types.rs
// Request/response types shared by all completion clients

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single completion call.
///
/// Stages match on this and substitute their fallback; it never crosses a
/// stage boundary.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("model returned no text")]
    Empty,
}

/// Chat message in OpenAI-compatible format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// One text generation: prompt plus sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature: 0.3,
            max_output_tokens: 50,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Token usage reported by the service
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Parsed result of one chat completion call
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub request_id: String,
    pub content: Option<String>,
    pub usage: Option<Usage>,
    pub duration_ms: u64,
}

impl ChatResult {
    /// Generated text, rejecting missing or whitespace-only content
    pub fn into_text(self) -> Result<String, GenerationError> {
        match self.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(GenerationError::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = GenerationRequest::new("hello", "llama-3.1-8b-instant")
            .with_temperature(0.7)
            .with_max_output_tokens(10);
        assert_eq!(req.prompt, "hello");
        assert_eq!(req.model, "llama-3.1-8b-instant");
        assert_eq!(req.temperature, 0.7);
        assert_eq!(req.max_output_tokens, 10);
    }

    #[test]
    fn test_message_role() {
        assert_eq!(Message::user("hi").role, "user");
    }

    #[test]
    fn test_into_text_rejects_blank() {
        let result = ChatResult {
            request_id: "r".into(),
            content: Some("  \n".into()),
            usage: None,
            duration_ms: 0,
        };
        assert!(matches!(result.into_text(), Err(GenerationError::Empty)));

        let result = ChatResult {
            request_id: "r".into(),
            content: None,
            usage: None,
            duration_ms: 0,
        };
        assert!(matches!(result.into_text(), Err(GenerationError::Empty)));
    }

    #[test]
    fn test_into_text_keeps_content() {
        let result = ChatResult {
            request_id: "r".into(),
            content: Some(" Happy ".into()),
            usage: None,
            duration_ms: 3,
        };
        assert_eq!(result.into_text().unwrap(), " Happy ");
    }

    #[test]
    fn test_api_error_display() {
        let err = GenerationError::Api {
            status: 401,
            body: "invalid api key".into(),
        };
        assert_eq!(err.to_string(), "API error 401: invalid api key");
    }
}
