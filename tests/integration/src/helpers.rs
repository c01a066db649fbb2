//! Test helpers for integration tests
//!
//! Provides a scripted WebSocket gateway and a REST API that records every
//! request it receives. Both listen on ephemeral local ports.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use curdis_common::DiscordConfig;
use curdis_rest::RestClient;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{accept_async, WebSocketStream};

/// Token the mock REST API accepts
pub const TEST_TOKEN: &str = "test-token";

/// Application id reported by the mock REST API
pub const APPLICATION_ID: u64 = 555;

/// Upper bound for any single wait in a test
pub const WAIT: Duration = Duration::from_secs(5);

// ============================================================================
// REST API
// ============================================================================

/// One request seen by the mock REST API
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path below the API base, e.g. `/gateway/bot`
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// REST API double serving canned platform responses
pub struct MockRestApi {
    pub addr: SocketAddr,
    requests: RequestLog,
    _handle: JoinHandle<()>,
}

impl MockRestApi {
    /// Start the API on an ephemeral port
    pub async fn start() -> Result<Self> {
        let requests = RequestLog::default();
        let app = Router::new().fallback(handle).with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            requests,
            _handle: handle,
        })
    }

    /// API base URL, versioned like the real one
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v9", self.addr)
    }

    /// Platform configuration pointing at this API
    pub fn config(&self, token: &str) -> DiscordConfig {
        let mut config = DiscordConfig::new(token);
        config.api_url = self.base_url();
        config.http_timeout_secs = 5;
        config
    }

    /// Client using the accepted token, without contacting the API
    pub fn client(&self) -> Result<RestClient> {
        Ok(RestClient::new(&self.config(TEST_TOKEN))?)
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Wait until a matching request has been received
    pub async fn wait_for_request(
        &self,
        matches: impl Fn(&RecordedRequest) -> bool,
    ) -> Result<RecordedRequest> {
        let deadline = Instant::now() + WAIT;
        loop {
            if let Some(found) = self.requests().into_iter().find(|r| matches(r)) {
                return Ok(found);
            }
            if Instant::now() >= deadline {
                bail!("no matching request, saw {:?}", self.requests());
            }
            sleep(Duration::from_millis(10)).await;
        }
    }
}

async fn handle(
    State(requests): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().strip_prefix("/api/v9").unwrap_or(uri.path()).to_string();
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    requests.lock().expect("request log poisoned").push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        authorization: authorization.clone(),
        body: serde_json::from_str(&body).ok(),
    });

    if authorization.as_deref() != Some(format!("Bot {TEST_TOKEN}").as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "401: Unauthorized", "code": 0 })),
        )
            .into_response();
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", ["gateway", "bot"]) => {
            Json(json!({ "url": "wss://gateway.discord.gg", "shards": 1 })).into_response()
        }
        ("GET", ["oauth2", "applications", "@me"]) => {
            Json(json!({ "id": APPLICATION_ID.to_string(), "name": "curdis" })).into_response()
        }
        ("GET", ["channels", channel_id, "messages"]) => Json(json!([{
            "id": "901",
            "channel_id": channel_id,
            "author": { "id": "7", "username": "alice" },
            "content": "hello",
        }]))
        .into_response(),
        ("POST", ["channels", channel_id, "messages"]) => Json(json!({
            "id": "902",
            "channel_id": channel_id,
            "author": { "id": "8", "username": "curdis", "bot": true },
        }))
        .into_response(),
        ("DELETE", ["channels", _, "messages", _])
        | ("DELETE", ["applications", _, "commands", _])
        | ("POST", ["interactions", _, _, "callback"]) => StatusCode::NO_CONTENT.into_response(),
        ("GET", ["guilds", guild_id, "channels"]) => Json(json!([
            { "id": "42", "guild_id": guild_id, "name": "general", "type": 0 },
            { "id": "43", "guild_id": guild_id, "name": "Voice", "type": 2 },
        ]))
        .into_response(),
        ("GET", ["applications", _, "commands"]) => Json(json!([
            { "id": "700", "name": "ping", "description": "Ping", "type": 1 },
        ]))
        .into_response(),
        ("POST", ["applications", _, "commands"]) => {
            (StatusCode::CREATED, Json(json!({ "id": "700" }))).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "404: Not Found", "code": 0 })),
        )
            .into_response(),
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// Gateway double accepting client connections one at a time
pub struct MockGateway {
    listener: TcpListener,
    addr: SocketAddr,
}

impl MockGateway {
    pub async fn bind() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        Ok(Self { listener, addr })
    }

    /// URL to hand to the client
    pub fn url(&self) -> String {
        format!("ws://{}/?v=9&encoding=json", self.addr)
    }

    /// Accept the next client and complete the WebSocket upgrade
    pub async fn accept(&self) -> Result<GatewaySession> {
        let (stream, _) = timeout(WAIT, self.listener.accept())
            .await
            .context("no client connected")??;
        let ws = accept_async(stream).await?;
        Ok(GatewaySession { ws })
    }
}

/// Server side of one accepted client connection
pub struct GatewaySession {
    ws: WebSocketStream<TcpStream>,
}

impl GatewaySession {
    /// Next text frame from the client, parsed as JSON
    pub async fn next_json(&mut self) -> Result<Value> {
        loop {
            let frame = timeout(WAIT, self.ws.next())
                .await
                .context("timed out waiting for a client frame")?
                .context("client disconnected")??;

            match frame {
                WsMessage::Text(text) => return Ok(serde_json::from_str(&text)?),
                WsMessage::Close(frame) => bail!("client closed the connection: {frame:?}"),
                _ => continue,
            }
        }
    }

    /// Next frame with the given op code, skipping any others
    pub async fn next_op(&mut self, op: u64) -> Result<Value> {
        loop {
            let frame = self.next_json().await?;
            if frame["op"] == op {
                return Ok(frame);
            }
        }
    }

    /// Fail if the client sends a text frame within `window`
    pub async fn expect_silence(&mut self, window: Duration) -> Result<()> {
        match timeout(window, self.ws.next()).await {
            Err(_) => Ok(()),
            Ok(Some(Ok(WsMessage::Text(text)))) => bail!("unexpected frame: {text}"),
            Ok(other) => bail!("unexpected socket event: {other:?}"),
        }
    }

    pub async fn send_json(&mut self, frame: &Value) -> Result<()> {
        self.send_raw(&frame.to_string()).await
    }

    pub async fn send_raw(&mut self, text: &str) -> Result<()> {
        self.ws.send(WsMessage::Text(text.to_string())).await?;
        Ok(())
    }

    /// Send Hello with the given heartbeat interval
    pub async fn hello(&mut self, interval_ms: u64) -> Result<()> {
        self.send_json(&json!({ "op": 10, "d": { "heartbeat_interval": interval_ms } }))
            .await
    }

    /// Send a dispatch frame
    pub async fn dispatch(&mut self, name: &str, seq: u64, data: Value) -> Result<()> {
        self.send_json(&json!({ "op": 0, "t": name, "s": seq, "d": data }))
            .await
    }

    /// Close the connection with a gateway close code
    pub async fn close(&mut self, code: u16, reason: &str) -> Result<()> {
        self.ws
            .close(Some(CloseFrame {
                code: CloseCode::from(code),
                reason: reason.to_string().into(),
            }))
            .await?;
        Ok(())
    }
}
