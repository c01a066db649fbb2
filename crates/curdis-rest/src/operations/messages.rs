//! Message endpoints

use curdis_core::{Message, Snowflake};
use reqwest::Method;
use serde_json::json;

use crate::client::RestClient;
use crate::error::RestError;

impl RestClient {
    /// Post a plain text message to a channel
    pub async fn send_message(&self, channel_id: Snowflake, content: &str) -> Result<(), RestError> {
        let body = json!({ "content": content });
        self.call_unit(
            Method::POST,
            &format!("/channels/{channel_id}/messages"),
            Some(&body),
        )
        .await
    }

    /// Delete a message from its channel
    pub async fn delete_message(&self, message: &Message) -> Result<(), RestError> {
        self.call_unit(
            Method::DELETE,
            &format!("/channels/{}/messages/{}", message.channel_id, message.id),
            None,
        )
        .await
    }

    /// Fetch the most recent messages of a channel
    pub async fn channel_messages(&self, channel_id: Snowflake) -> Result<Vec<Message>, RestError> {
        self.call(Method::GET, &format!("/channels/{channel_id}/messages"), None)
            .await
    }
}
