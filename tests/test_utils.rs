//! Test utilities for emotions integration tests

use async_trait::async_trait;
use emotions::llm::{GenerationError, GenerationRequest, LlmClient};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Completion client that replays a fixed script of replies.
///
/// Each call pops the next scripted result; once the script runs out every
/// call fails with `GenerationError::Empty`.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_results(replies.into_iter().map(|r| Ok(r.into())))
    }

    pub fn with_results(results: impl IntoIterator<Item = Result<String, GenerationError>>) -> Self {
        Self {
            replies: Mutex::new(results.into_iter().collect()),
            ..Self::default()
        }
    }

    /// A client whose every call fails
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::Empty))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
