// src/cli/check.rs
// Read-only configuration status

use anyhow::{Result, bail};
use emotions::config::EnvConfig;
use emotions::config::env::API_KEY_ENV_VAR;

pub fn run_check() -> Result<()> {
    let config = EnvConfig::load();
    let validation = config.validate();

    println!("Emotions Configuration Status\n");

    let key_status = match config.api_key.as_deref() {
        Some(_) if config.require_api_key().is_ok() => "set",
        Some(_) => "placeholder",
        None => "MISSING",
    };
    println!("  {}: {}", API_KEY_ENV_VAR, key_status);
    println!("  Model: {}", config.model);
    println!("  Endpoint: {}", config.base_url);
    println!(
        "  Timeouts: request {}s, connect {}s",
        config.request_timeout.as_secs(),
        config.connect_timeout.as_secs()
    );

    println!("\n{}", validation.report());

    if !validation.is_valid() {
        bail!("configuration has {} error(s)", validation.errors.len());
    }
    Ok(())
}
