//! Gateway message format
//!
//! Shape of every frame written to the gateway. Inbound frames are decoded
//! by [`crate::events::GatewayEvent`].

use super::{IdentifyPayload, OpCode};
use serde::Serialize;
use serde_json::Value;

/// Outbound gateway frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayMessage {
    /// Operation code
    pub op: OpCode,

    /// Event data payload
    pub d: Option<Value>,
}

impl GatewayMessage {
    /// Create an Identify message (op=2)
    pub fn identify(payload: &IdentifyPayload) -> Result<Self, serde_json::Error> {
        Ok(Self {
            op: OpCode::Identify,
            d: Some(serde_json::to_value(payload)?),
        })
    }

    /// Create a Heartbeat message (op=1)
    ///
    /// `d` carries the Unix time in seconds at which the beat was built.
    #[must_use]
    pub fn heartbeat(timestamp: i64) -> Self {
        Self {
            op: OpCode::Heartbeat,
            d: Some(Value::from(timestamp)),
        }
    }

    /// Heartbeat stamped with the current time
    #[must_use]
    pub fn heartbeat_now() -> Self {
        Self::heartbeat(chrono::Utc::now().timestamp())
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
