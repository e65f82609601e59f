use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_GEMINI_API_URL;
use crate::models::credential::Credential;

/// Application configuration loaded from environment variables.
/// Nothing is required: without `GEMINI_API_KEY` the service runs in offline mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<Credential>,
    pub gemini_api_url: String,
    /// Upper bound on one outbound LLM call; expiry counts as a transport failure.
    pub request_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").and_then(Credential::new),
            gemini_api_url: optional_env("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            request_timeout: Duration::from_secs(parse_env_or(
                "REQUEST_TIMEOUT_SECS",
                optional_env("REQUEST_TIMEOUT_SECS"),
                60,
            )?),
            port: parse_env_or("PORT", optional_env("PORT"), 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}
