//! Interaction entities - inbound command invocations

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CommandOptionType, Member, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Interaction type sent for a command invocation
pub const APPLICATION_COMMAND: u8 = 2;

/// Inbound command invocation
///
/// Carried by `INTERACTION_CREATE` dispatches. The `token` authorises the
/// single response the bot may send back for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Interaction {
    pub id: Snowflake,
    #[serde(default)]
    pub application_id: Option<Snowflake>,
    #[serde(rename = "type", default)]
    pub kind: u8,
    pub token: String,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
    #[serde(default)]
    pub data: InteractionData,
    /// Present for invocations inside a guild
    #[serde(default)]
    pub member: Option<Member>,
    /// Present for invocations in direct messages
    #[serde(default)]
    pub user: Option<User>,
}

impl Interaction {
    /// The user who invoked the command
    pub fn invoking_user(&self) -> Option<&User> {
        self.member.as_ref().map(|m| &m.user).or(self.user.as_ref())
    }

    /// Name of the invoked command
    pub fn command_name(&self) -> &str {
        &self.data.name
    }

    /// Check if this interaction is a command invocation
    pub fn is_command(&self) -> bool {
        self.kind == APPLICATION_COMMAND
    }
}

/// Invoked command and its arguments
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<InteractionOption>,
}

/// Value of a supplied argument
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    User(Snowflake),
    Channel(Snowflake),
    /// Value of an option type this client does not model
    Other(Value),
}

impl OptionValue {
    /// Decode a raw option value according to its declared type
    ///
    /// Without a known scalar type the JSON shape decides the variant.
    pub fn from_json(
        name: &str,
        kind: Option<CommandOptionType>,
        value: Value,
    ) -> Result<Self, DomainError> {
        let invalid = |expected: &'static str| DomainError::InvalidOptionValue {
            name: name.to_string(),
            expected,
        };

        match kind {
            Some(CommandOptionType::String) => match value {
                Value::String(s) => Ok(Self::String(s)),
                _ => Err(invalid("string")),
            },
            Some(CommandOptionType::Integer) => {
                value.as_i64().map(Self::Integer).ok_or_else(|| invalid("integer"))
            }
            Some(CommandOptionType::Boolean) => {
                value.as_bool().map(Self::Boolean).ok_or_else(|| invalid("boolean"))
            }
            Some(CommandOptionType::User) => parse_reference(&value)
                .map(Self::User)
                .ok_or_else(|| invalid("user id")),
            Some(CommandOptionType::Channel) => parse_reference(&value)
                .map(Self::Channel)
                .ok_or_else(|| invalid("channel id")),
            _ => Ok(match value {
                Value::String(s) => Self::String(s),
                Value::Bool(b) => Self::Boolean(b),
                Value::Number(n) if n.is_i64() => Self::Integer(n.as_i64().unwrap_or_default()),
                other => Self::Other(other),
            }),
        }
    }

    /// Name of the variant, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::User(_) => "user",
            Self::Channel(_) => "channel",
            Self::Other(_) => "other",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_user_id(&self) -> Option<Snowflake> {
        match self {
            Self::User(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_channel_id(&self) -> Option<Snowflake> {
        match self {
            Self::Channel(id) => Some(*id),
            _ => None,
        }
    }
}

fn parse_reference(value: &Value) -> Option<Snowflake> {
    match value {
        Value::String(s) => Snowflake::parse(s).ok(),
        Value::Number(n) => n.as_u64().map(Snowflake::new),
        _ => None,
    }
}

/// Argument supplied with a command invocation
///
/// Sub-command options carry nested `options` and no `value`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawInteractionOption")]
pub struct InteractionOption {
    pub name: String,
    pub kind: Option<CommandOptionType>,
    pub value: Option<OptionValue>,
    pub options: Vec<InteractionOption>,
}

#[derive(Deserialize)]
struct RawInteractionOption {
    name: String,
    #[serde(rename = "type", default)]
    kind: Option<CommandOptionType>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    options: Vec<InteractionOption>,
}

impl TryFrom<RawInteractionOption> for InteractionOption {
    type Error = DomainError;

    fn try_from(raw: RawInteractionOption) -> Result<Self, Self::Error> {
        let value = match raw.value {
            Some(Value::Null) | None => None,
            Some(value) => Some(OptionValue::from_json(&raw.name, raw.kind, value)?),
        };

        Ok(Self {
            name: raw.name,
            kind: raw.kind,
            value,
            options: raw.options,
        })
    }
}

impl InteractionOption {
    /// Create an option carrying a value
    pub fn with_value(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            kind: None,
            value: Some(value),
            options: Vec::new(),
        }
    }

    /// Find an option by exact name
    pub fn find<'a>(options: &'a [InteractionOption], name: &str) -> Option<&'a InteractionOption> {
        options.iter().find(|o| o.name == name)
    }

    /// Get the value of a named option, failing if it was not supplied
    pub fn require<'a>(options: &'a [InteractionOption], name: &str) -> Result<&'a OptionValue, DomainError> {
        Self::find(options, name)
            .and_then(|o| o.value.as_ref())
            .ok_or_else(|| DomainError::MissingOption(name.to_string()))
    }

    /// Get a named string option
    pub fn require_str<'a>(options: &'a [InteractionOption], name: &str) -> Result<&'a str, DomainError> {
        let value = Self::require(options, name)?;
        value.as_str().ok_or_else(|| DomainError::OptionTypeMismatch {
            name: name.to_string(),
            expected: "string",
            actual: value.type_name(),
        })
    }
}

/// Response to an interaction
///
/// Posted to the interaction callback endpoint. Only the immediate
/// channel-message form is produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: InteractionResponseData,
}

/// Message content carried by an interaction response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponseData {
    #[serde(default)]
    pub content: String,
}

impl InteractionResponse {
    /// Response type: reply with a message in the invoking channel
    pub const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

    /// Create an immediate channel-message response
    #[must_use]
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: Self::CHANNEL_MESSAGE_WITH_SOURCE,
            data: InteractionResponseData {
                content: content.into(),
            },
        }
    }

    pub fn content(&self) -> &str {
        &self.data.content
    }
}
