//! Gateway events
//!
//! Decoding of inbound frames into typed events.

mod decode;
mod event_types;
mod payloads;

pub use decode::{DecodeError, DispatchEvent, GatewayEvent};
pub use event_types::DispatchEventType;
pub use payloads::{MessageDeleteEvent, ReadyEvent};
