//! Gateway connection settings

use std::fmt;

use curdis_common::{DiscordConfig, GatewaySettings, DEFAULT_GATEWAY_URL};
use curdis_core::Intents;

use crate::protocol::{IdentifyPayload, IdentifyProperties};

/// Settings for one gateway connection
#[derive(Clone)]
pub struct GatewayConfig {
    /// WebSocket URL, including the version and encoding query
    pub url: String,
    pub token: String,
    pub intents: Intents,
    pub properties: IdentifyProperties,
    /// Capacity of the outbound frame queue
    pub outbound_buffer: usize,
}

impl GatewayConfig {
    /// Default outbound queue capacity
    pub const DEFAULT_OUTBOUND_BUFFER: usize = 100;

    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_GATEWAY_URL.to_string(),
            token: token.into(),
            intents: Intents::DEFAULT,
            properties: IdentifyProperties::default(),
            outbound_buffer: Self::DEFAULT_OUTBOUND_BUFFER,
        }
    }

    /// Build from the loaded bot configuration
    #[must_use]
    pub fn from_settings(discord: &DiscordConfig, gateway: &GatewaySettings) -> Self {
        Self {
            url: discord.gateway_url.clone(),
            outbound_buffer: gateway.outbound_buffer,
            ..Self::new(discord.token.clone())
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Identify payload sent as the first frame of every connection
    #[must_use]
    pub fn identify_payload(&self) -> IdentifyPayload {
        IdentifyPayload::new(self.token.clone())
            .with_intents(self.intents)
            .with_properties(self.properties.clone())
    }
}

// Keep the token out of logs
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("intents", &self.intents)
            .field("properties", &self.properties)
            .field("outbound_buffer", &self.outbound_buffer)
            .finish_non_exhaustive()
    }
}
