//! Handshake
//!
//! Identify is written directly to the socket as the first frame of every
//! connection, before the writer task takes over the sink.

use futures_util::{Sink, SinkExt};
use tokio_tungstenite::tungstenite::{Error as WsError, Message as WsMessage};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::protocol::GatewayMessage;

/// Build the Identify frame for a connection
pub fn identify_frame(config: &GatewayConfig) -> Result<GatewayMessage, GatewayError> {
    Ok(GatewayMessage::identify(&config.identify_payload())?)
}

/// Write the Identify frame and wait for the write to complete
///
/// A serialization or write failure is fatal for the connection.
pub async fn send_identify<S>(config: &GatewayConfig, sink: &mut S) -> Result<(), GatewayError>
where
    S: Sink<WsMessage, Error = WsError> + Unpin,
{
    let json = identify_frame(config)?.to_json()?;
    sink.send(WsMessage::Text(json)).await?;

    tracing::debug!(
        intents = config.intents.bits(),
        os = %config.properties.os,
        "Identify sent"
    );
    Ok(())
}
