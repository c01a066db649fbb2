//! # curdis-core
//!
//! Platform model shared by the REST client and the gateway: snowflake ids,
//! gateway intents, users, channels, messages, application commands and
//! interactions. This crate performs no I/O.

pub mod entities;
pub mod error;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, ChannelType, Command, CommandOption, CommandOptionType, CommandType, Interaction,
    InteractionData, InteractionOption, InteractionResponse, InteractionResponseData, Member,
    Message, OptionValue, User,
};
pub use error::DomainError;
pub use value_objects::{Intents, Snowflake, SnowflakeParseError};
