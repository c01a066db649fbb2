//! Application command entities - slash commands registered with the platform

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Application command type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandType {
    /// Slash command typed in the chat input
    #[default]
    ChatInput,
    /// Context-menu command on a user
    User,
    /// Context-menu command on a message
    Message,
    /// Any type this client does not model
    Unknown(u8),
}

impl CommandType {
    /// Get the numeric value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::ChatInput => 1,
            Self::User => 2,
            Self::Message => 3,
            Self::Unknown(value) => value,
        }
    }
}

impl From<u8> for CommandType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            other => Self::Unknown(other),
        }
    }
}

impl Serialize for CommandType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for CommandType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Self::from)
    }
}

/// Command option (argument) type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandOptionType {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    /// Reference to a user, delivered as a snowflake
    User,
    /// Reference to a channel, delivered as a snowflake
    Channel,
    /// Any type this client does not model
    Unknown(u8),
}

impl CommandOptionType {
    /// Get the numeric value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::SubCommand => 1,
            Self::SubCommandGroup => 2,
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Unknown(value) => value,
        }
    }

    /// Get the name of this option type
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SubCommand => "sub command",
            Self::SubCommandGroup => "sub command group",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::User => "user",
            Self::Channel => "channel",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Check if this option groups nested options instead of carrying a value
    #[must_use]
    pub const fn is_group(self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }
}

impl From<u8> for CommandOptionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::SubCommand,
            2 => Self::SubCommandGroup,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            other => Self::Unknown(other),
        }
    }
}

impl Serialize for CommandOptionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for CommandOptionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Self::from)
    }
}

impl std::fmt::Display for CommandOptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

/// Declared argument of an application command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

impl CommandOption {
    /// Create an optional argument
    #[must_use]
    pub fn new(kind: CommandOptionType, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }

    /// Mark the argument as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Application command
///
/// `id` is assigned by the platform and is absent on commands that have not
/// been registered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: CommandType,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl Command {
    /// Maximum length of a command name
    pub const MAX_NAME_LEN: usize = 32;

    /// Maximum length of a command description
    pub const MAX_DESCRIPTION_LEN: usize = 100;

    /// Create a chat-input (slash) command
    #[must_use]
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            kind: CommandType::ChatInput,
            options: Vec::new(),
        }
    }

    /// Add an argument
    #[must_use]
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Check the command against the platform's naming rules
    pub fn validate(&self) -> Result<(), DomainError> {
        let name_ok = !self.name.is_empty()
            && self.name.chars().count() <= Self::MAX_NAME_LEN
            && self
                .name
                .chars()
                .all(|c| c == '-' || c == '_' || (c.is_alphanumeric() && !c.is_uppercase()));
        if !name_ok {
            return Err(DomainError::ValidationError(format!(
                "invalid command name: {:?}",
                self.name
            )));
        }

        let description_len = self.description.chars().count();
        if self.kind == CommandType::ChatInput
            && (description_len == 0 || description_len > Self::MAX_DESCRIPTION_LEN)
        {
            return Err(DomainError::ValidationError(format!(
                "description of {} must be 1-{} characters",
                self.name,
                Self::MAX_DESCRIPTION_LEN
            )));
        }

        Ok(())
    }
}
