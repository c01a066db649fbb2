//! Shared test doubles

use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context as TaskContext, Poll};

use async_trait::async_trait;
use curdis_common::DiscordConfig;
use curdis_core::{Interaction, InteractionOption, InteractionResponse, Snowflake, User};
use curdis_rest::RestClient;
use futures_util::{Sink, Stream};
use tokio_tungstenite::tungstenite::{Error as WsError, Message as WsMessage};

use crate::handlers::{Context, InteractionResponder};

/// Records responses instead of posting them
#[derive(Default)]
pub struct RecordingResponder {
    sent: Mutex<Vec<(Snowflake, String, InteractionResponse)>>,
}

impl RecordingResponder {
    /// Interaction id, token and response of every delivery so far
    pub fn sent(&self) -> Vec<(Snowflake, String, InteractionResponse)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionResponder for RecordingResponder {
    async fn respond(&self, interaction: &Interaction, response: InteractionResponse) {
        self.sent
            .lock()
            .unwrap()
            .push((interaction.id, interaction.token.clone(), response));
    }
}

/// Context whose REST client is never contacted
pub fn context() -> Context {
    Context::new(RestClient::new(&DiscordConfig::new("token")).unwrap())
}

pub async fn pong(_: Context, _: User, _: Option<Snowflake>, _: Vec<InteractionOption>) -> String {
    "pong".to_string()
}

/// Socket whose read side never yields and whose write side records frames
///
/// A broken socket fails every write.
#[derive(Debug, Default)]
pub struct TestSocket {
    pub frames: Vec<WsMessage>,
    broken: bool,
}

impl TestSocket {
    pub fn broken() -> Self {
        Self {
            frames: Vec::new(),
            broken: true,
        }
    }
}

impl Sink<WsMessage> for TestSocket {
    type Error = WsError;

    fn poll_ready(self: Pin<&mut Self>, _: &mut TaskContext<'_>) -> Poll<Result<(), WsError>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(mut self: Pin<&mut Self>, item: WsMessage) -> Result<(), WsError> {
        if self.broken {
            return Err(WsError::AlreadyClosed);
        }
        self.frames.push(item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut TaskContext<'_>) -> Poll<Result<(), WsError>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut TaskContext<'_>) -> Poll<Result<(), WsError>> {
        Poll::Ready(Ok(()))
    }
}

impl Stream for TestSocket {
    type Item = Result<WsMessage, WsError>;

    fn poll_next(self: Pin<&mut Self>, _: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        Poll::Pending
    }
}
