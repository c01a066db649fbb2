//! Outbound writer
//!
//! Once Identify has been written, this is the only task that writes to the
//! socket. Every later frame is queued through an [`Outbound`] handle and
//! written in queue order.

use futures_util::{Sink, SinkExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::error::GatewayError;
use crate::protocol::GatewayMessage;

/// Handle for queuing frames to the writer
#[derive(Debug, Clone)]
pub struct Outbound {
    tx: mpsc::Sender<GatewayMessage>,
}

impl Outbound {
    /// Create a handle and the receiver the writer drains
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<GatewayMessage>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Queue a frame, waiting for room if the queue is full
    pub async fn send(&self, message: GatewayMessage) -> Result<(), GatewayError> {
        self.tx
            .send(message)
            .await
            .map_err(|_| GatewayError::WriterClosed)
    }

    /// Check if the writer has stopped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Drain `rx` into `sink` until every handle is dropped or a write fails
///
/// The sink is closed on the way out.
pub async fn run<S>(mut sink: S, mut rx: mpsc::Receiver<GatewayMessage>)
where
    S: Sink<WsMessage> + Unpin,
    S::Error: std::fmt::Display,
{
    while let Some(message) = rx.recv().await {
        let json = match message.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(op = %message.op, error = %e, "Failed to serialize frame");
                continue;
            }
        };

        if let Err(e) = sink.send(WsMessage::Text(json)).await {
            tracing::warn!(op = %message.op, error = %e, "Failed to write frame");
            break;
        }
        tracing::trace!(op = %message.op, "Frame written");
    }

    // Refuse further frames before closing
    rx.close();
    if let Err(e) = sink.close().await {
        tracing::debug!(error = %e, "Error closing socket writer");
    }
}
