//! Interaction responder
//!
//! Delivers a command's response through the interaction callback endpoint.

use async_trait::async_trait;
use curdis_core::{Interaction, InteractionResponse};
use curdis_rest::RestClient;

/// Content sent when no handler is registered for the invoked command
pub const FALLBACK_RESPONSE: &str = "Command isn't handled yet";

/// Delivers interaction responses
///
/// Delivery failures are the responder's to log; they never reach the
/// read loop.
#[async_trait]
pub trait InteractionResponder: Send + Sync + 'static {
    async fn respond(&self, interaction: &Interaction, response: InteractionResponse);
}

/// Responder posting to the REST callback endpoint
#[derive(Debug, Clone)]
pub struct RestResponder {
    rest: RestClient,
}

impl RestResponder {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl InteractionResponder for RestResponder {
    async fn respond(&self, interaction: &Interaction, response: InteractionResponse) {
        let result = self
            .rest
            .create_interaction_response(interaction.id, &interaction.token, &response)
            .await;

        match result {
            Ok(reply) if reply.is_success() => {
                tracing::debug!(
                    interaction_id = %interaction.id,
                    command = %interaction.command_name(),
                    "Interaction response delivered"
                );
            }
            Ok(reply) => {
                tracing::warn!(
                    interaction_id = %interaction.id,
                    command = %interaction.command_name(),
                    status = reply.status.as_u16(),
                    body = %reply.body,
                    "Interaction response rejected"
                );
            }
            Err(e) => {
                tracing::warn!(
                    interaction_id = %interaction.id,
                    command = %interaction.command_name(),
                    error = %e,
                    "Failed to deliver interaction response"
                );
            }
        }
    }
}
