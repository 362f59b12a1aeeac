//! Configuration management and environment variable loading

use crate::{LexiError, Result};
use std::env;

/// Environment variable holding the generation API key.
///
/// The key lives in server-side configuration only; it is never embedded in
/// source or shipped to a client.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the generation model name
pub const GEMINI_MODEL_VAR: &str = "GEMINI_MODEL";

/// Environment variable overriding the simulated analysis delay, in
/// milliseconds
pub const ANALYSIS_DELAY_MS_VAR: &str = "LEXIGUARD_ANALYSIS_DELAY_MS";

/// Load environment variables from a .env file
///
/// Loads from a .env file in the current directory or a parent directory.
/// Safe to call multiple times (only loads once).
///
/// # Example
///
/// ```no_run
/// use lexiguard_core::config::{load_env, GEMINI_API_KEY_VAR};
///
/// load_env().ok();
/// let api_key = std::env::var(GEMINI_API_KEY_VAR).unwrap_or_default();
/// ```
pub fn load_env() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!("✓ Loaded environment from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::LineParse(line, pos)) => Err(LexiError::config(format!(
            "Failed to parse .env file at line {}, position {}",
            line, pos
        ))),
        Err(dotenvy::Error::Io(_)) => {
            tracing::warn!("No .env file found - using system environment variables only");
            Ok(())
        }
        Err(e) => Err(LexiError::config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

/// Get required environment variable
///
/// Returns an error if the variable is not set
pub fn get_required_env(key: &str) -> Result<String> {
    env::var(key).map_err(|_| {
        LexiError::config(format!(
            "Required environment variable '{}' is not set. \
             Check your .env file or system environment.",
            key
        ))
    })
}

/// Get optional environment variable with default
pub fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get environment variable as integer
pub fn get_env_int<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
