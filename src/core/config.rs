//! Process configuration
//!
//! Everything is read once at startup and handed to the components that need
//! it. Nothing here is global: `main` builds a [`Config`] and passes pieces of
//! it down.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Environment variables holding the bot token, checked in order.
pub const TOKEN_VARS: &[&str] = &["TOKEN", "BOT_TOKEN", "TELOXIDE_TOKEN"];

/// Download site the resolver posts the source URL to
pub const DEFAULT_DOWNLOAD_WEBSITE: &str = "https://theteradownloader.com";

/// Liveness endpoint port when PORT is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Browser-like user agent sent to the download site
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Network configuration for the Bot API client
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API requests (in seconds)
    /// Large so that video uploads are not cut off
    pub const REQUEST_TIMEOUT_SECS: u64 = 900; // 15 minutes

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing Telegram token: set one of {}", TOKEN_VARS.join(", "))]
    MissingToken,

    #[error("invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid {var} value '{value}': {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Resolved process configuration
#[derive(Debug)]
pub struct Config {
    /// Bot API token
    pub bot_token: SecretString,
    /// Custom Bot API server (BOT_API_URL), Telegram's default when unset
    pub bot_api_url: Option<Url>,
    /// Resolver endpoint (DOWNLOAD_WEBSITE)
    pub download_website: Url,
    /// Liveness endpoint port (PORT)
    pub port: u16,
    /// Where per-request video files are written (TEMP_FILES_DIR)
    pub temp_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = TOKEN_VARS
            .iter()
            .find_map(|key| var(*key))
            .map(SecretString::from)
            .ok_or(ConfigError::MissingToken)?;

        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let download_website = parse_url(
            "DOWNLOAD_WEBSITE",
            var("DOWNLOAD_WEBSITE").unwrap_or_else(|| DEFAULT_DOWNLOAD_WEBSITE.to_string()),
        )?;

        let bot_api_url = var("BOT_API_URL")
            .map(|value| parse_url("BOT_API_URL", value))
            .transpose()?;

        let temp_dir = var("TEMP_FILES_DIR").map(PathBuf::from).unwrap_or_else(env::temp_dir);

        Ok(Self {
            bot_token,
            bot_api_url,
            download_website,
            port,
            temp_dir,
        })
    }
}

/// Resolver endpoint without requiring a token, for the `resolve` subcommand.
pub fn download_website_from_env() -> Result<Url, ConfigError> {
    let value = env::var("DOWNLOAD_WEBSITE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_WEBSITE.to_string());
    parse_url("DOWNLOAD_WEBSITE", value)
}

fn parse_url(var: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl { var, value, source })
}
