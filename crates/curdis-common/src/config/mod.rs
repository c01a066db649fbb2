//! Configuration structs

mod app_config;

pub use app_config::{
    AppSettings, BotConfig, ConfigError, DiscordConfig, Environment, GatewaySettings,
    DEFAULT_API_URL, DEFAULT_GATEWAY_URL,
};
