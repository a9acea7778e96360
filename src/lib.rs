// src/lib.rs
// Emotions - reflective journaling backed by a chat completions model

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod journal;
pub mod llm;
pub mod pipeline;

pub use error::{JournalError, Result};
