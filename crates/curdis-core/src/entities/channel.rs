//! Channel entity - represents a text channel, voice channel, DM, or category

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_objects::Snowflake;

/// Channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelType {
    /// Guild text channel
    #[default]
    GuildText,
    /// Direct message between users
    Dm,
    /// Guild voice channel
    GuildVoice,
    /// Direct message between multiple users
    GroupDm,
    /// Guild category for organizing channels
    GuildCategory,
    /// Any type this client does not model
    Unknown(u8),
}

impl ChannelType {
    /// Get the numeric value
    #[inline]
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::GuildText => 0,
            Self::Dm => 1,
            Self::GuildVoice => 2,
            Self::GroupDm => 3,
            Self::GuildCategory => 4,
            Self::Unknown(value) => value,
        }
    }

    /// Check if messages can be sent to channels of this type
    #[must_use]
    pub fn is_text_based(self) -> bool {
        matches!(self, Self::GuildText | Self::Dm | Self::GroupDm)
    }
}

impl From<u8> for ChannelType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::GuildText,
            1 => Self::Dm,
            2 => Self::GuildVoice,
            3 => Self::GroupDm,
            4 => Self::GuildCategory,
            other => Self::Unknown(other),
        }
    }
}

impl From<ChannelType> for u8 {
    fn from(ct: ChannelType) -> Self {
        ct.as_u8()
    }
}

impl Serialize for ChannelType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ChannelType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Self::from)
    }
}

/// Channel entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub channel_type: ChannelType,
}

impl Channel {
    /// Create a channel reference that only carries its id
    ///
    /// Used for events (such as message deletion) that identify a channel
    /// without describing it.
    #[must_use]
    pub fn from_id(id: Snowflake) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Create a new guild text channel
    #[must_use]
    pub fn new_text(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: name.into(),
            channel_type: ChannelType::GuildText,
        }
    }

    /// Check if this is a guild channel
    #[inline]
    pub fn is_guild_channel(&self) -> bool {
        self.guild_id.is_some()
    }

    /// Mention markup for this channel
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}
