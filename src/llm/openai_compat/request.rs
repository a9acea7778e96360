// src/llm/openai_compat/request.rs
// OpenAI-compatible chat request builder

use crate::llm::{GenerationRequest, Message};
use serde::Serialize;

/// Chat completion request (OpenAI-compatible format)
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Create a new chat request with required fields
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set maximum output tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature (0.0 to 2.0)
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl From<GenerationRequest> for ChatRequest {
    /// A generation is sent as a single user message
    fn from(req: GenerationRequest) -> Self {
        ChatRequest::new(req.model, vec![Message::user(req.prompt)])
            .with_max_tokens(req.max_output_tokens)
            .with_temperature(req.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_new() {
        let req = ChatRequest::new("test-model", vec![]);
        assert_eq!(req.model, "test-model");
        assert!(req.messages.is_empty());
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn test_from_generation_request() {
        let gen_req = GenerationRequest::new("How do I feel?", "llama-3.1-8b-instant")
            .with_temperature(0.5)
            .with_max_output_tokens(30);
        let req = ChatRequest::from(gen_req);
        assert_eq!(req.messages, vec![Message::user("How do I feel?")]);
        assert_eq!(req.max_tokens, Some(30));
        assert_eq!(req.temperature, Some(0.5));
    }

    #[test]
    fn test_serialization_skips_unset() {
        let req = ChatRequest::new("m", vec![Message::user("hi")]);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["content"], "hi");
    }
}
