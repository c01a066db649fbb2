//! Platform entities - objects exchanged with the REST API and the gateway

mod channel;
mod command;
mod interaction;
mod message;
mod user;

pub use channel::{Channel, ChannelType};
pub use command::{Command, CommandOption, CommandOptionType, CommandType};
pub use interaction::{
    Interaction, InteractionData, InteractionOption, InteractionResponse, InteractionResponseData,
    OptionValue,
};
pub use message::Message;
pub use user::{Member, User};
