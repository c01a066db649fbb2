//! Message entity - represents a chat message

use serde::{Deserialize, Serialize};

use super::User;
use crate::value_objects::Snowflake;

/// Message entity
///
/// The subset of a message object the bot consumes, both from
/// `MESSAGE_CREATE` dispatches and from the channel history endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub author: User,
    /// Empty unless the session holds the message-content intent
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

impl Message {
    /// Create a new Message
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        author: User,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            channel_id,
            guild_id: None,
            author,
            content: content.into(),
            pinned: false,
        }
    }

    /// Check if the message was sent by a bot account
    #[inline]
    pub fn is_from_bot(&self) -> bool {
        self.author.bot
    }

    /// Get a truncated preview of the message (for logs)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }

    /// Check if message content is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
