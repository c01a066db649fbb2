//! Handler context

use curdis_core::Snowflake;
use curdis_rest::{RestClient, RestError};

/// Passed to every handler invocation
///
/// Cheap to clone; gives handlers access to the REST API.
#[derive(Debug, Clone)]
pub struct Context {
    rest: RestClient,
}

impl Context {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Post a plain text message to a channel
    pub async fn send_message(&self, channel_id: Snowflake, content: &str) -> Result<(), RestError> {
        self.rest.send_message(channel_id, content).await
    }
}
