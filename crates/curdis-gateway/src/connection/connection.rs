//! Gateway connection
//!
//! Owns the socket for one session: sends Identify, runs the single read
//! loop, starts the heartbeat on Hello and hands dispatches to the
//! dispatcher. There is no reconnect; the first fatal error ends the
//! connection.

use futures_util::{Sink, Stream, StreamExt};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::{Error as WsError, Message as WsMessage};
use tokio_util::sync::CancellationToken;

use super::{handshake, writer, Outbound};
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::events::GatewayEvent;
use crate::handlers::EventDispatcher;
use crate::heartbeat;
use crate::protocol::{GatewayMessage, HelloPayload};

/// One gateway session
pub struct GatewayConnection {
    config: GatewayConfig,
    dispatcher: EventDispatcher,
    cancel: CancellationToken,
    heartbeat: Option<JoinHandle<()>>,
}

impl GatewayConnection {
    pub fn new(config: GatewayConfig, dispatcher: EventDispatcher) -> Self {
        Self {
            config,
            dispatcher,
            cancel: CancellationToken::new(),
            heartbeat: None,
        }
    }

    /// Dial the gateway and run until the connection fails
    ///
    /// Only returns on a fatal error: dial failure, a failed handshake, a
    /// socket error or the gateway closing the connection.
    pub async fn run(self) -> Result<(), GatewayError> {
        tracing::info!(url = %self.config.url, "Connecting to gateway");

        let (socket, _) = tokio_tungstenite::connect_async(self.config.url.as_str())
            .await
            .map_err(GatewayError::connect)?;

        tracing::info!("Gateway connection established");
        self.run_with_socket(socket).await
    }

    /// Run over an already established WebSocket
    pub async fn run_with_socket<S>(mut self, socket: S) -> Result<(), GatewayError>
    where
        S: Stream<Item = Result<WsMessage, WsError>> + Sink<WsMessage, Error = WsError> + Unpin + Send + 'static,
    {
        let (mut sink, mut stream) = socket.split();

        if let Err(e) = handshake::send_identify(&self.config, &mut sink).await {
            tracing::warn!(error = %e, "Identify failed");
            return Err(e);
        }

        let (outbound, rx) = Outbound::channel(self.config.outbound_buffer);
        let writer = tokio::spawn(writer::run(sink, rx));

        let error = self.read_loop(&mut stream, &outbound).await;

        self.shutdown(outbound, writer).await;
        tracing::info!(error = %error, "Gateway connection closed");
        Err(error)
    }

    async fn read_loop<R>(&mut self, stream: &mut R, outbound: &Outbound) -> GatewayError
    where
        R: Stream<Item = Result<WsMessage, WsError>> + Unpin,
    {
        while let Some(frame) = stream.next().await {
            let frame = match frame {
                Ok(frame) => frame,
                Err(e) => return GatewayError::from(e),
            };

            match frame {
                WsMessage::Text(text) => self.handle_frame(text.as_bytes(), outbound).await,
                WsMessage::Binary(bytes) => self.handle_frame(&bytes, outbound).await,
                WsMessage::Close(frame) => {
                    let (code, reason) = frame.map_or((None, String::new()), |f| {
                        (Some(u16::from(f.code)), f.reason.into_owned())
                    });
                    return GatewayError::ConnectionClosed { code, reason };
                }
                WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => {}
            }
        }

        GatewayError::ConnectionClosed {
            code: None,
            reason: "stream ended".to_string(),
        }
    }

    async fn handle_frame(&mut self, frame: &[u8], outbound: &Outbound) {
        let event = match GatewayEvent::decode(frame) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable frame");
                return;
            }
        };

        tracing::trace!(event = %event.name(), "Frame received");

        match event {
            GatewayEvent::Hello(hello) => self.start_heartbeat(hello, outbound),
            GatewayEvent::Dispatch(event) => self.dispatcher.dispatch(event).await,
            GatewayEvent::Heartbeat => {
                if outbound.send(GatewayMessage::heartbeat_now()).await.is_err() {
                    tracing::debug!("Requested heartbeat dropped, writer closed");
                }
            }
            GatewayEvent::HeartbeatAck => tracing::trace!("Heartbeat acknowledged"),
            GatewayEvent::Reconnect => {
                tracing::warn!("Gateway requested a reconnect, which is not supported");
            }
            GatewayEvent::InvalidSession { resumable } => {
                tracing::warn!(resumable, "Gateway invalidated the session");
            }
            GatewayEvent::Unknown { op } => tracing::trace!(op, "Ignoring unexpected op code"),
        }
    }

    fn start_heartbeat(&mut self, hello: HelloPayload, outbound: &Outbound) {
        if self.heartbeat.is_some() {
            tracing::debug!("Ignoring repeated Hello");
            return;
        }
        if hello.heartbeat_interval == 0 {
            tracing::warn!("Hello carried a zero heartbeat interval, heartbeat not started");
            return;
        }

        tracing::debug!(heartbeat_interval = hello.heartbeat_interval, "Hello received");
        self.heartbeat = Some(heartbeat::spawn(
            hello.interval(),
            outbound.clone(),
            self.cancel.child_token(),
        ));
    }

    /// Stop the heartbeat and wait for both background tasks
    async fn shutdown(&mut self, outbound: Outbound, writer: JoinHandle<()>) {
        self.cancel.cancel();

        if let Some(heartbeat) = self.heartbeat.take() {
            if let Err(e) = heartbeat.await {
                tracing::warn!(error = %e, "Heartbeat task failed");
            }
        }

        // The writer exits once the last handle is gone
        drop(outbound);
        if let Err(e) = writer.await {
            tracing::warn!(error = %e, "Writer task failed");
        }
    }
}
