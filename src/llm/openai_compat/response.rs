// src/llm/openai_compat/response.rs
// OpenAI-compatible chat response parsing

use crate::llm::{ChatResult, GenerationError, Usage};
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    choices: Vec<ResponseChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Parse an OpenAI-compatible chat response into a ChatResult
pub fn parse_chat_response(
    response_body: &str,
    request_id: &str,
    duration_ms: u64,
) -> Result<ChatResult, GenerationError> {
    let data: ChatResponse = serde_json::from_str(response_body)
        .map_err(|e| GenerationError::Malformed(format!("failed to parse chat response: {}", e)))?;

    // First choice only; n is never set above 1
    let content = data.choices.into_iter().next().and_then(|c| c.message.content);

    Ok(ChatResult {
        request_id: request_id.to_owned(),
        content,
        usage: data.usage,
        duration_ms,
    })
}
