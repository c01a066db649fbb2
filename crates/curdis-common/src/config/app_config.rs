//! Bot configuration structs
//!
//! Loads configuration from environment variables and an optional `.env` file.

use serde::Deserialize;
use std::env;
use std::fmt;
use std::time::Duration;

/// REST API base URL (API version 9)
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v9";

/// Gateway URL, pinned to the API version and JSON encoding
pub const DEFAULT_GATEWAY_URL: &str = "wss://gateway.discord.gg/?v=9&encoding=json";

/// Main bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub app: AppSettings,
    pub discord: DiscordConfig,
    pub gateway: GatewaySettings,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Platform credentials and endpoints
#[derive(Clone, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl DiscordConfig {
    /// Create a configuration with default endpoints
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: default_api_url(),
            gateway_url: default_gateway_url(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }

    /// Overall timeout applied to every REST call
    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

// Keep the token out of logs
impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("gateway_url", &self.gateway_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

/// Gateway connection tuning
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    /// Capacity of the outbound frame queue feeding the socket writer
    #[serde(default = "default_outbound_buffer")]
    pub outbound_buffer: usize,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            outbound_buffer: default_outbound_buffer(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "curdis".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    60
}

fn default_outbound_buffer() -> usize {
    100
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DISCORD_TOKEN` is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_name = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => default_env(),
        };

        let token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingVar("DISCORD_TOKEN"))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: env_name,
            },
            discord: DiscordConfig {
                token,
                api_url: lookup("DISCORD_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_api_url),
                gateway_url: lookup("DISCORD_GATEWAY_URL").unwrap_or_else(default_gateway_url),
                http_timeout_secs: parse_or(
                    &lookup,
                    "DISCORD_HTTP_TIMEOUT_SECS",
                    default_http_timeout_secs,
                )?,
            },
            gateway: GatewaySettings {
                outbound_buffer: parse_or(&lookup, "GATEWAY_OUTBOUND_BUFFER", default_outbound_buffer)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, value)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
