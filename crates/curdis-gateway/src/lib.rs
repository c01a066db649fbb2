//! # curdis-gateway
//!
//! Gateway client: connects to the platform's real-time WebSocket, performs
//! the Identify handshake, keeps the session alive with heartbeats and routes
//! dispatched events to application handlers.
//!
//! [`Bot`] is the entry point for applications.

pub mod bot;
pub mod config;
pub mod connection;
pub mod error;
pub mod events;
pub mod handlers;
pub mod heartbeat;
pub mod protocol;

#[cfg(test)]
mod testing;

pub use bot::Bot;
pub use config::GatewayConfig;
pub use connection::GatewayConnection;
pub use error::GatewayError;
pub use events::{DecodeError, DispatchEvent, GatewayEvent};
pub use handlers::{
    CommandHandler, Context, EventDispatcher, HandlerRegistry, InteractionResponder,
    MessageDeleteHandler, MessageHandler, RestResponder, FALLBACK_RESPONSE,
};
