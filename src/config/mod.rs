// src/config/mod.rs
// Configuration loading (environment + .env files)

pub mod env;

pub use env::{ConfigValidation, EnvConfig};

use tracing::debug;

/// Load `.env` files. The current directory is read first so that its
/// values take precedence over the per-user file in `~/.emotions/.env`.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        debug!("Loaded .env from current directory");
    }
    if let Some(home) = dirs::home_dir() {
        let path = home.join(".emotions/.env");
        if dotenvy::from_path(&path).is_ok() {
            debug!(path = %path.display(), "Loaded per-user .env");
        }
    }
}
