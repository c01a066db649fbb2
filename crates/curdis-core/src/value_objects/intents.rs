//! Gateway intents bitflags
//!
//! Declares which categories of events a gateway session wants to receive.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Gateway intent flags
    ///
    /// Sent as a plain integer in the Identify payload.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Intents: u64 {
        /// Guild, channel and role lifecycle events
        const GUILDS                   = 1 << 0;
        /// Member join/update/leave (privileged)
        const GUILD_MEMBERS            = 1 << 1;
        /// Bans and audit log entries
        const GUILD_MODERATION         = 1 << 2;
        const GUILD_EMOJIS_AND_STICKERS = 1 << 3;
        const GUILD_INTEGRATIONS       = 1 << 4;
        const GUILD_WEBHOOKS           = 1 << 5;
        const GUILD_INVITES            = 1 << 6;
        const GUILD_VOICE_STATES       = 1 << 7;
        /// Presence updates (privileged)
        const GUILD_PRESENCES          = 1 << 8;
        /// Message create/update/delete in guild channels
        const GUILD_MESSAGES           = 1 << 9;
        const GUILD_MESSAGE_REACTIONS  = 1 << 10;
        const GUILD_MESSAGE_TYPING     = 1 << 11;
        /// Message events in direct messages
        const DIRECT_MESSAGES          = 1 << 12;
        const DIRECT_MESSAGE_REACTIONS = 1 << 13;
        const DIRECT_MESSAGE_TYPING    = 1 << 14;
        /// Message content in message events (privileged)
        const MESSAGE_CONTENT          = 1 << 15;

        /// Intents sent by the bot's Identify frame (513)
        const DEFAULT = Self::GUILDS.bits() | Self::GUILD_MESSAGES.bits();
    }
}

impl Intents {
    /// Check if any privileged intent is requested
    ///
    /// Privileged intents must also be enabled for the application.
    #[inline]
    pub fn is_privileged(&self) -> bool {
        self.intersects(Self::GUILD_MEMBERS | Self::GUILD_PRESENCES | Self::MESSAGE_CONTENT)
    }
}

impl Default for Intents {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Serialize for Intents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for Intents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u64::deserialize(deserializer)?;
        Ok(Intents::from_bits_truncate(bits))
    }
}

impl From<u64> for Intents {
    fn from(bits: u64) -> Self {
        Intents::from_bits_truncate(bits)
    }
}

impl From<Intents> for u64 {
    fn from(intents: Intents) -> Self {
        intents.bits()
    }
}
