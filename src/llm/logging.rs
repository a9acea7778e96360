// src/llm/logging.rs
// Shared completion logging helpers

use super::{ChatResult, Usage};
use tracing::info;

/// Log usage statistics for a completion call.
pub fn log_usage(request_id: &str, provider: &str, usage: &Usage) {
    info!(
        request_id = %request_id,
        prompt_tokens = usage.prompt_tokens,
        completion_tokens = usage.completion_tokens,
        total_tokens = usage.total_tokens,
        "{} usage stats", provider
    );
}

/// Log completion summary for a completion call.
pub fn log_completion(result: &ChatResult, provider: &str) {
    info!(
        request_id = %result.request_id,
        duration_ms = result.duration_ms,
        content_len = result.content.as_deref().map_or(0, str::len),
        "{} completion done", provider
    );
}
