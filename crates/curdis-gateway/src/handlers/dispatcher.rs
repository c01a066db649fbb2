//! Event dispatcher
//!
//! Routes decoded dispatch events to the registered handlers. Every handler
//! is awaited before `dispatch` returns, so events are handled one at a time
//! in arrival order.

use std::sync::Arc;

use curdis_core::{Interaction, InteractionResponse};

use super::responder::FALLBACK_RESPONSE;
use super::{Context, HandlerRegistry, InteractionResponder};
use crate::events::{DispatchEvent, MessageDeleteEvent};

/// Routes dispatch events to handlers
pub struct EventDispatcher {
    registry: HandlerRegistry,
    context: Context,
    responder: Arc<dyn InteractionResponder>,
}

impl EventDispatcher {
    pub fn new(
        registry: HandlerRegistry,
        context: Context,
        responder: Arc<dyn InteractionResponder>,
    ) -> Self {
        Self {
            registry,
            context,
            responder,
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Handle one dispatch event
    pub async fn dispatch(&self, event: DispatchEvent) {
        match event {
            DispatchEvent::Ready(ready) => {
                tracing::info!(
                    user = %ready.user.username,
                    session_id = %ready.session_id,
                    version = ready.v,
                    "Session ready"
                );
            }
            DispatchEvent::InteractionCreate(interaction) => {
                self.handle_interaction(&interaction).await;
            }
            DispatchEvent::MessageCreate(message) => {
                if let Some(handler) = self.registry.message_handler() {
                    handler.handle(self.context.clone(), *message).await;
                }
            }
            DispatchEvent::MessageDelete(deleted) => self.handle_message_delete(&deleted).await,
            DispatchEvent::Other(name) => {
                tracing::trace!(event = %name, "Ignoring unhandled event");
            }
        }
    }

    /// Run the command handler for an interaction and build its response
    ///
    /// Unregistered commands get [`FALLBACK_RESPONSE`].
    pub async fn command_response(&self, interaction: &Interaction) -> InteractionResponse {
        let name = interaction.command_name();
        let Some(handler) = self.registry.command(name) else {
            tracing::debug!(command = %name, "No handler for command");
            return InteractionResponse::message(FALLBACK_RESPONSE);
        };

        let user = interaction.invoking_user().cloned().unwrap_or_default();
        tracing::debug!(command = %name, user = %user.username, "Running command");

        let content = handler
            .handle(
                self.context.clone(),
                user,
                interaction.guild_id,
                interaction.data.options.clone(),
            )
            .await;
        InteractionResponse::message(content)
    }

    async fn handle_interaction(&self, interaction: &Interaction) {
        let response = self.command_response(interaction).await;
        self.responder.respond(interaction, response).await;
    }

    async fn handle_message_delete(&self, deleted: &MessageDeleteEvent) {
        if let Some(handler) = self.registry.message_delete_handler() {
            handler.handle(self.context.clone(), deleted.channel()).await;
        }
    }
}
