//! Dispatch payloads without a counterpart in the platform model

use curdis_core::{Channel, Snowflake, User};
use serde::Deserialize;

/// Payload of a READY dispatch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadyEvent {
    /// Gateway protocol version
    pub v: u8,
    /// The bot's own user
    pub user: User,
    pub session_id: String,
}

/// Payload of a MESSAGE_DELETE dispatch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageDeleteEvent {
    #[serde(default)]
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

impl MessageDeleteEvent {
    /// Reference to the channel the message was deleted from
    ///
    /// Only the channel id is known; every other field is left at its default.
    #[must_use]
    pub fn channel(&self) -> Channel {
        Channel::from_id(self.channel_id)
    }
}
