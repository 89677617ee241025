use crate::suggestions::GeminiConfig;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub seed_listings: bool,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_defaults = GeminiConfig::default();

        Ok(Self {
            addr: parse_or("PLATESHARE_ADDR", &lookup, SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            max_workers: parse_or("PLATESHARE_MAX_WORKERS", &lookup, 8)?,
            seed_listings: parse_or("PLATESHARE_SEED_LISTINGS", &lookup, true)?,
            gemini: GeminiConfig {
                api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
                model: lookup("GEMINI_MODEL").unwrap_or(gemini_defaults.model),
                api_base: lookup("GEMINI_API_BASE").unwrap_or(gemini_defaults.api_base),
                timeout: Duration::from_secs(parse_or(
                    "SUGGESTION_TIMEOUT_SECS",
                    &lookup,
                    gemini_defaults.timeout.as_secs(),
                )?),
            },
        })
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
