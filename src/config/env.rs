// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::error::{JournalError, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Credential variable for the chat completions service
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";
/// Value shipped in the sample `.env`; treated the same as a missing key
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GROQ_API_KEY_HERE";

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration validation result
#[derive(Debug)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Default for ConfigValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Chat completions credential (GROQ_API_KEY)
    pub api_key: Option<String>,
    /// Model id used by every stage (EMOTIONS_MODEL)
    pub model: String,
    /// OpenAI-compatible chat completions endpoint (EMOTIONS_BASE_URL)
    pub base_url: String,
    /// Whole-request timeout (EMOTIONS_REQUEST_TIMEOUT_SECS)
    pub request_timeout: Duration,
    /// TCP connect timeout (EMOTIONS_CONNECT_TIMEOUT_SECS)
    pub connect_timeout: Duration,
    /// Values that were present but could not be parsed
    rejected: Vec<String>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        info!("Loading environment configuration");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut rejected = Vec::new();

        let mut read_secs = |name: &str, default: u64| match read(name) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(variable = name, value = %raw, "Invalid timeout, using default");
                    rejected.push(format!(
                        "{} = '{}' is not a positive number of seconds; using {}",
                        name, raw, default
                    ));
                    Duration::from_secs(default)
                }
            },
            None => Duration::from_secs(default),
        };

        let request_timeout =
            read_secs("EMOTIONS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);
        let connect_timeout =
            read_secs("EMOTIONS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS);

        let config = Self {
            api_key: read(API_KEY_ENV_VAR).map(|k| k.trim().to_string()),
            model: read("EMOTIONS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: read("EMOTIONS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout,
            connect_timeout,
            rejected,
        };
        debug!(
            model = %config.model,
            base_url = %config.base_url,
            has_key = config.api_key.is_some(),
            "Environment configuration loaded"
        );
        config
    }

    /// The usable credential, or a configuration error if it is missing
    /// or still set to the placeholder
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            None => Err(JournalError::Config(format!(
                "{} not found in environment variables",
                API_KEY_ENV_VAR
            ))),
            Some(PLACEHOLDER_API_KEY) => Err(JournalError::Config(format!(
                "{} is still set to the placeholder value",
                API_KEY_ENV_VAR
            ))),
            Some(key) => Ok(key),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if let Err(e) = self.require_api_key() {
            validation.add_error(e.to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            validation.add_error(format!(
                "EMOTIONS_BASE_URL '{}' must be an http(s) URL",
                self.base_url
            ));
        }

        for msg in &self.rejected {
            validation.add_warning(msg.clone());
        }

        validation
    }
}
