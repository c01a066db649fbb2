//! Dispatch event names
//!
//! The `t` field of op 0 frames.

use std::fmt;

/// Dispatch event types the client decodes
///
/// Every other name is passed through as [`crate::events::DispatchEvent::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchEventType {
    /// Sent after a successful Identify
    Ready,
    /// A user invoked an application command
    InteractionCreate,
    /// New message
    MessageCreate,
    /// Message deleted
    MessageDelete,
}

impl DispatchEventType {
    /// Get the wire name of the event type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::InteractionCreate => "INTERACTION_CREATE",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageDelete => "MESSAGE_DELETE",
        }
    }

    /// Look up an event type by its wire name (exact match)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "READY" => Some(Self::Ready),
            "INTERACTION_CREATE" => Some(Self::InteractionCreate),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_DELETE" => Some(Self::MessageDelete),
            _ => None,
        }
    }
}

impl fmt::Display for DispatchEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
