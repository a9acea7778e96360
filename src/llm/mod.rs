// src/llm/mod.rs
// Text completion clients

mod groq;
mod http_client;
pub mod logging;
pub mod openai_compat;
mod provider;
mod types;

pub use groq::GroqClient;
pub use http_client::LlmHttpClient;
pub use provider::LlmClient;
pub use types::{ChatResult, GenerationError, GenerationRequest, Message, Usage};
