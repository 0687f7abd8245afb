use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub events: Vec<EventConfig>,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Effective display settings: configured values with defaults filled in.
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the league REST API.
    pub base_url: String,
    /// Public site URL, used by `open` to build team page links.
    #[serde(default)]
    pub site_url: Option<String>,
    /// Name of the environment variable holding the API token, for leagues
    /// that gate their API. Unset means unauthenticated requests.
    #[serde(default)]
    pub token_env: Option<String>,
    /// Request timeout in humantime format, e.g. "10s" (the default).
    #[serde(default)]
    pub timeout: Option<String>,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Result<Duration> {
        match &self.timeout {
            Some(timeout) => humantime::parse_duration(timeout)
                .with_context(|| format!("Invalid api.timeout '{}'", timeout)),
            None => Ok(Duration::from_secs(10)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EventConfig {
    /// Optional label shown in verbose output; the slug is used otherwise.
    pub name: Option<String>,
    /// Event slug as it appears in league API URLs.
    pub slug: String,
}

/// How resolved scores are rendered.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Placeholder for records without a usable score (default "-").
    #[serde(default)]
    pub fallback: Option<String>,
    /// Decimal digits for non-whole scores (default 1).
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl DisplayConfig {
    pub fn fallback(&self) -> &str {
        self.fallback
            .as_deref()
            .unwrap_or(crate::output::DEFAULT_FALLBACK)
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.unwrap_or(crate::output::DEFAULT_DECIMALS)
    }
}
