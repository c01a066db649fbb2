//! Handshake payload definitions

use std::time::Duration;

use curdis_core::Intents;
use serde::{Deserialize, Serialize};

/// Payload for op 10 (Hello)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloPayload {
    /// Heartbeat interval in milliseconds
    pub heartbeat_interval: u64,
}

impl HelloPayload {
    #[must_use]
    pub fn with_interval(heartbeat_interval: u64) -> Self {
        Self { heartbeat_interval }
    }

    /// Heartbeat cadence as a duration
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval)
    }
}

/// Payload for op 2 (Identify)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyPayload {
    /// Bot token, sent without the `Bot ` prefix
    pub token: String,
    pub intents: Intents,
    pub properties: IdentifyProperties,
    pub presence: PresencePayload,
}

impl IdentifyPayload {
    /// Identify with the default intents, properties and presence
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            intents: Intents::DEFAULT,
            properties: IdentifyProperties::default(),
            presence: PresencePayload::default(),
        }
    }

    #[must_use]
    pub fn with_intents(mut self, intents: Intents) -> Self {
        self.intents = intents;
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: IdentifyProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// Client connection properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyProperties {
    pub os: String,
    pub browser: String,
    pub device: String,
}

impl IdentifyProperties {
    /// Library name reported as browser and device
    pub const LIBRARY: &'static str = "curdis";

    #[must_use]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }
}

impl Default for IdentifyProperties {
    fn default() -> Self {
        Self {
            os: "linux".to_string(),
            browser: Self::LIBRARY.to_string(),
            device: Self::LIBRARY.to_string(),
        }
    }
}

/// Initial presence sent with Identify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresencePayload {
    /// Unix time in milliseconds since the client went idle
    pub since: Option<u64>,
    #[serde(default)]
    pub activities: Vec<serde_json::Value>,
    /// One of `online`, `idle`, `dnd`, `invisible`, `offline`
    pub status: String,
    pub afk: bool,
}

impl Default for PresencePayload {
    fn default() -> Self {
        Self {
            since: None,
            activities: Vec::new(),
            status: "online".to_string(),
            afk: false,
        }
    }
}
