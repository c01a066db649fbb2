//! Test fixtures
//!
//! Dispatch payloads shaped like the ones the platform sends.

use serde_json::{json, Value};

/// INTERACTION_CREATE payload for a guild command invocation
pub fn command_interaction(id: u64, token: &str, command: &str) -> Value {
    json!({
        "id": id.to_string(),
        "application_id": "555",
        "type": 2,
        "token": token,
        "guild_id": "3",
        "channel_id": "42",
        "data": { "id": "700", "name": command, "type": 1 },
        "member": {
            "user": { "id": "7", "username": "alice" },
            "nick": null
        }
    })
}

/// MESSAGE_CREATE payload from a human user
pub fn message_create(id: u64, channel_id: u64, content: &str) -> Value {
    json!({
        "id": id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": "3",
        "author": { "id": "7", "username": "alice" },
        "content": content,
        "pinned": false
    })
}

/// MESSAGE_DELETE payload
pub fn message_delete(id: u64, channel_id: u64) -> Value {
    json!({
        "id": id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": "3"
    })
}

/// READY payload
pub fn ready() -> Value {
    json!({
        "v": 9,
        "user": { "id": "8", "username": "curdis", "bot": true },
        "session_id": "session-1",
        "guilds": []
    })
}
