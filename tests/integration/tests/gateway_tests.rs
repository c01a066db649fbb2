//! Gateway Integration Tests
//!
//! Drive a bot against the scripted gateway, with interaction callbacks and
//! message sends landing on the recording REST API.
//!
//! Run with: cargo test -p integration-tests --test gateway_tests

use std::time::Duration;

use curdis_common::BotConfig;
use curdis_core::{Channel, InteractionOption, Message, Snowflake, User};
use curdis_gateway::protocol::CloseCode;
use curdis_gateway::{Bot, Context, GatewayConfig, GatewayError, FALLBACK_RESPONSE};
use integration_tests::{
    command_interaction, message_create, message_delete, ready, MockGateway, MockRestApi,
    APPLICATION_ID, TEST_TOKEN, WAIT,
};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

async fn pong(_: Context, _: User, _: Option<Snowflake>, _: Vec<InteractionOption>) -> String {
    "pong".to_string()
}

fn bot(api: &MockRestApi, gateway: &MockGateway) -> Bot {
    let rest = api
        .client()
        .expect("Failed to build client")
        .with_application_id(Snowflake::new(APPLICATION_ID));
    Bot::new(rest, GatewayConfig::new(TEST_TOKEN).with_url(gateway.url()))
}

async fn finish(handle: JoinHandle<Result<(), GatewayError>>) -> GatewayError {
    timeout(WAIT, handle)
        .await
        .expect("bot did not stop")
        .expect("bot task panicked")
        .expect_err("run only returns on failure")
}

// ============================================================================
// Handshake and heartbeat
// ============================================================================

#[tokio::test]
async fn test_identify_is_first_frame() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let handle = tokio::spawn(bot(&api, &gateway).run());

    let mut session = gateway.accept().await.unwrap();
    let identify = session.next_json().await.unwrap();

    assert_eq!(identify["op"], 2);
    assert_eq!(identify["d"]["token"], TEST_TOKEN);
    assert_eq!(identify["d"]["intents"], 513);
    assert_eq!(identify["d"]["properties"]["os"], "linux");
    assert_eq!(identify["d"]["presence"]["status"], "online");

    // No heartbeat before Hello
    session
        .expect_silence(Duration::from_millis(300))
        .await
        .unwrap();

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

#[tokio::test]
async fn test_heartbeat_follows_hello() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let handle = tokio::spawn(bot(&api, &gateway).run());

    let mut session = gateway.accept().await.unwrap();
    session.next_op(2).await.unwrap();
    session.hello(100).await.unwrap();

    let before = chrono::Utc::now().timestamp();
    let first = session.next_op(1).await.unwrap();
    let second = session.next_op(1).await.unwrap();
    let after = chrono::Utc::now().timestamp();

    for beat in [&first, &second] {
        let stamp = beat["d"].as_i64().expect("heartbeat carries a timestamp");
        assert!((before - 1..=after).contains(&stamp), "stamp {stamp}");
    }

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

#[tokio::test]
async fn test_heartbeat_request_answered_immediately() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let handle = tokio::spawn(bot(&api, &gateway).run());

    let mut session = gateway.accept().await.unwrap();
    session.next_op(2).await.unwrap();
    session.hello(45_000).await.unwrap();
    session.send_json(&json!({ "op": 1, "d": null })).await.unwrap();

    let beat = session.next_json().await.unwrap();
    assert_eq!(beat["op"], 1);

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn test_ping_command_answered_over_rest() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let handle = tokio::spawn(bot(&api, &gateway).command("ping", pong).run());

    let mut session = gateway.accept().await.unwrap();
    session.next_op(2).await.unwrap();
    session.hello(45_000).await.unwrap();
    session.dispatch("READY", 1, ready()).await.unwrap();
    session.send_raw("this is not json").await.unwrap();
    session
        .dispatch("INTERACTION_CREATE", 2, command_interaction(1001, "tok-abc", "ping"))
        .await
        .unwrap();

    let callback = api
        .wait_for_request(|r| r.path == "/interactions/1001/tok-abc/callback")
        .await
        .unwrap();
    assert_eq!(callback.method, "POST");
    assert_eq!(callback.authorization.as_deref(), Some("Bot test-token"));
    assert_eq!(
        callback.body,
        Some(json!({ "type": 4, "data": { "content": "pong" } }))
    );

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

#[tokio::test]
async fn test_unregistered_command_gets_fallback() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let handle = tokio::spawn(bot(&api, &gateway).command("ping", pong).run());

    let mut session = gateway.accept().await.unwrap();
    session.next_op(2).await.unwrap();
    session.hello(45_000).await.unwrap();
    session
        .dispatch("INTERACTION_CREATE", 1, command_interaction(1002, "tok-def", "echo"))
        .await
        .unwrap();

    let callback = api
        .wait_for_request(|r| r.path == "/interactions/1002/tok-def/callback")
        .await
        .unwrap();
    assert_eq!(
        callback.body,
        Some(json!({ "type": 4, "data": { "content": FALLBACK_RESPONSE } }))
    );

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

#[tokio::test]
async fn test_message_events_reach_handlers() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let delete_tx = tx.clone();

    let bot = bot(&api, &gateway)
        .on_message(move |ctx: Context, message: Message| {
            let tx = tx.clone();
            async move {
                ctx.send_message(message.channel_id, &format!("echo: {}", message.content))
                    .await
                    .ok();
                tx.send(format!("create {}", message.content)).ok();
            }
        })
        .on_message_delete(move |_: Context, channel: Channel| {
            let tx = delete_tx.clone();
            async move {
                tx.send(format!("delete {}", channel.id)).ok();
            }
        });
    let handle = tokio::spawn(bot.run());

    let mut session = gateway.accept().await.unwrap();
    session.next_op(2).await.unwrap();
    session.hello(45_000).await.unwrap();
    session
        .dispatch("MESSAGE_CREATE", 1, json!({ "content": 5 }))
        .await
        .unwrap();
    session
        .dispatch("MESSAGE_CREATE", 2, message_create(901, 42, "hi"))
        .await
        .unwrap();
    session
        .dispatch("MESSAGE_DELETE", 3, message_delete(901, 42))
        .await
        .unwrap();

    assert_eq!(timeout(WAIT, rx.recv()).await.unwrap().unwrap(), "create hi");
    assert_eq!(timeout(WAIT, rx.recv()).await.unwrap().unwrap(), "delete 42");

    let sent = api
        .wait_for_request(|r| r.method == "POST" && r.path == "/channels/42/messages")
        .await
        .unwrap();
    assert_eq!(sent.body, Some(json!({ "content": "echo: hi" })));

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

// ============================================================================
// Termination
// ============================================================================

#[tokio::test]
async fn test_gateway_close_ends_run_with_error() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let handle = tokio::spawn(bot(&api, &gateway).run());

    let mut session = gateway.accept().await.unwrap();
    session.next_op(2).await.unwrap();
    session.hello(100).await.unwrap();
    session.close(4004, "Authentication failed.").await.unwrap();

    let err = finish(handle).await;
    assert_eq!(err.close_code(), Some(CloseCode::AuthenticationFailed));
    assert!(matches!(
        err,
        GatewayError::ConnectionClosed { code: Some(4004), .. }
    ));
}

#[tokio::test]
async fn test_unreachable_gateway_fails_to_connect() {
    let api = MockRestApi::start().await.unwrap();
    let config = GatewayConfig::new(TEST_TOKEN).with_url("ws://127.0.0.1:1");

    let err = Bot::new(api.client().unwrap(), config).run().await.unwrap_err();
    assert!(matches!(err, GatewayError::Connect(_)));
    assert!(api.requests().is_empty());
}

// ============================================================================
// Startup from configuration
// ============================================================================

#[tokio::test]
async fn test_bot_from_config_authenticates_and_connects() {
    let api = MockRestApi::start().await.unwrap();
    let gateway = MockGateway::bind().await.unwrap();
    let base_url = api.base_url();
    let gateway_url = gateway.url();

    let config = BotConfig::from_lookup(|key| match key {
        "DISCORD_TOKEN" => Some(TEST_TOKEN.to_string()),
        "DISCORD_API_URL" => Some(base_url.clone()),
        "DISCORD_GATEWAY_URL" => Some(gateway_url.clone()),
        _ => None,
    })
    .unwrap();

    let bot = Bot::from_config(&config).await.unwrap();
    assert_eq!(
        bot.rest().cached_application_id(),
        Some(Snowflake::new(APPLICATION_ID))
    );
    assert_eq!(bot.config().url, gateway.url());

    let handle = tokio::spawn(bot.command("ping", pong).run());
    let mut session = gateway.accept().await.unwrap();
    assert_eq!(session.next_json().await.unwrap()["op"], 2);

    session.close(4000, "done").await.unwrap();
    finish(handle).await;
}

#[tokio::test]
async fn test_bot_from_config_rejects_bad_token() {
    let api = MockRestApi::start().await.unwrap();
    let base_url = api.base_url();

    let config = BotConfig::from_lookup(|key| match key {
        "DISCORD_TOKEN" => Some("wrong-token".to_string()),
        "DISCORD_API_URL" => Some(base_url.clone()),
        _ => None,
    })
    .unwrap();

    let err = Bot::from_config(&config).await.unwrap_err();
    assert!(err.is_unauthorized());
}
