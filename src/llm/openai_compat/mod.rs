// src/llm/openai_compat/mod.rs
// Shared OpenAI-compatible request/response handling (Groq and friends)

mod request;
mod response;

pub use request::ChatRequest;
pub use response::parse_chat_response;
