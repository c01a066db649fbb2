//! Frame decoding
//!
//! Each inbound frame is decoded exactly once into a [`GatewayEvent`]. The
//! envelope (`op`, `t`, `d`) is read first; `d` is then decoded into the
//! variant the op code and event name select.

use curdis_core::{Interaction, Message};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{DispatchEventType, MessageDeleteEvent, ReadyEvent};
use crate::protocol::{HelloPayload, OpCode};

/// Frame decoding errors
///
/// Both variants are recoverable: the frame is logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Not even `op` could be read
    #[error("Malformed frame envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The envelope was fine but `d` did not match the event's shape
    #[error("Malformed {event} payload: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded inbound frame
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayEvent {
    /// Op 10, carries the heartbeat interval
    Hello(HelloPayload),
    /// Op 0
    Dispatch(DispatchEvent),
    /// Op 11
    HeartbeatAck,
    /// Op 1, the gateway asks for an immediate heartbeat
    Heartbeat,
    /// Op 7
    Reconnect,
    /// Op 9
    InvalidSession { resumable: bool },
    /// Any op code the client does not expect to receive
    Unknown { op: u8 },
}

/// A decoded dispatch (op 0) event
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    Ready(ReadyEvent),
    InteractionCreate(Box<Interaction>),
    MessageCreate(Box<Message>),
    MessageDelete(MessageDeleteEvent),
    /// Any event the client does not handle, by name
    Other(String),
}

#[derive(Deserialize)]
struct Envelope {
    op: u8,
    #[serde(default)]
    t: Option<String>,
    #[serde(default)]
    d: Value,
}

impl GatewayEvent {
    /// Decode a raw text or binary frame
    pub fn decode(frame: &[u8]) -> Result<Self, DecodeError> {
        let envelope: Envelope = serde_json::from_slice(frame).map_err(DecodeError::Envelope)?;

        let Some(op) = OpCode::from_u8(envelope.op) else {
            return Ok(Self::Unknown { op: envelope.op });
        };

        match op {
            OpCode::Hello => payload("HELLO", envelope.d).map(Self::Hello),
            OpCode::Dispatch => {
                DispatchEvent::decode(envelope.t.unwrap_or_default(), envelope.d).map(Self::Dispatch)
            }
            OpCode::HeartbeatAck => Ok(Self::HeartbeatAck),
            OpCode::Heartbeat => Ok(Self::Heartbeat),
            OpCode::Reconnect => Ok(Self::Reconnect),
            OpCode::InvalidSession => Ok(Self::InvalidSession {
                resumable: envelope.d.as_bool().unwrap_or(false),
            }),
            client_only => Ok(Self::Unknown {
                op: client_only.as_u8(),
            }),
        }
    }

    /// Short name for logs
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Hello(_) => "HELLO",
            Self::Dispatch(event) => event.name(),
            Self::HeartbeatAck => "HEARTBEAT_ACK",
            Self::Heartbeat => "HEARTBEAT",
            Self::Reconnect => "RECONNECT",
            Self::InvalidSession { .. } => "INVALID_SESSION",
            Self::Unknown { .. } => "UNKNOWN",
        }
    }
}

impl DispatchEvent {
    /// Decode the payload of a named dispatch
    pub fn decode(name: String, data: Value) -> Result<Self, DecodeError> {
        let Some(kind) = DispatchEventType::from_name(&name) else {
            return Ok(Self::Other(name));
        };

        let event = kind.as_str();
        Ok(match kind {
            DispatchEventType::Ready => Self::Ready(payload(event, data)?),
            DispatchEventType::InteractionCreate => {
                Self::InteractionCreate(Box::new(payload(event, data)?))
            }
            DispatchEventType::MessageCreate => Self::MessageCreate(Box::new(payload(event, data)?)),
            DispatchEventType::MessageDelete => Self::MessageDelete(payload(event, data)?),
        })
    }

    /// Wire name of the event
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ready(_) => DispatchEventType::Ready.as_str(),
            Self::InteractionCreate(_) => DispatchEventType::InteractionCreate.as_str(),
            Self::MessageCreate(_) => DispatchEventType::MessageCreate.as_str(),
            Self::MessageDelete(_) => DispatchEventType::MessageDelete.as_str(),
            Self::Other(name) => name,
        }
    }
}

fn payload<T: DeserializeOwned>(event: &str, data: Value) -> Result<T, DecodeError> {
    serde_json::from_value(data).map_err(|source| DecodeError::Payload {
        event: event.to_string(),
        source,
    })
}
