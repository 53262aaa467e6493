// src/config/secrets.rs

use anyhow::{anyhow, Result};
use tracing::debug;

/// Environment variable holding the API key for the synthesis services.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Resolve the API key, in priority order:
///
/// 1. the `--api-key` flag (trimmed; the key is often pasted with stray
///    whitespace)
/// 2. `OPENAI_API_KEY` from the process environment
/// 3. a `.env` file in the current working directory, loaded via `dotenvy`
pub fn resolve_api_key(cli_key: Option<&str>) -> Result<String> {
    if let Some(key) = cli_key {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    if let Ok(key) = std::env::var(API_KEY_VAR) {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }

    if dotenvy::dotenv().is_ok() {
        debug!("loaded .env from working directory");
        if let Ok(key) = std::env::var(API_KEY_VAR) {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }
    }

    Err(anyhow!(
        "no API key found: pass --api-key or set {API_KEY_VAR} (optionally via a .env file)"
    ))
}
