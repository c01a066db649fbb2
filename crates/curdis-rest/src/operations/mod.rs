//! Typed REST operations
//!
//! Each submodule adds an `impl RestClient` block for one API area.

mod application;
mod channels;
mod commands;
mod interactions;
mod messages;

pub use application::GatewayBotInfo;
