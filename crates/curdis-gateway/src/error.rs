//! Gateway error types

use tokio_tungstenite::tungstenite;

use crate::protocol::CloseCode;

/// Fatal gateway errors
///
/// Returned once by the connection's run entry point; the connection is gone
/// afterwards. Frame-level problems never surface here.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The WebSocket handshake with the gateway failed
    #[error("Failed to connect to gateway: {0}")]
    Connect(#[source] Box<tungstenite::Error>),

    /// Reading from the socket failed
    #[error("WebSocket error: {0}")]
    WebSocket(#[source] Box<tungstenite::Error>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The gateway closed the connection or the stream ended
    #[error("Connection closed (code: {code:?}, reason: {reason:?})")]
    ConnectionClosed { code: Option<u16>, reason: String },

    /// The outbound writer task has stopped
    #[error("Outbound writer closed")]
    WriterClosed,
}

impl GatewayError {
    pub(crate) fn connect(err: tungstenite::Error) -> Self {
        Self::Connect(Box::new(err))
    }

    /// Gateway close code, if the gateway sent a known one
    #[must_use]
    pub fn close_code(&self) -> Option<CloseCode> {
        match self {
            Self::ConnectionClosed { code: Some(code), .. } => CloseCode::from_u16(*code),
            _ => None,
        }
    }
}

impl From<tungstenite::Error> for GatewayError {
    fn from(err: tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}
