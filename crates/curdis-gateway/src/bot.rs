//! Bot facade
//!
//! Collects handlers, then runs one gateway connection.

use std::sync::Arc;

use curdis_common::BotConfig;
use curdis_rest::{RestClient, RestError};

use crate::config::GatewayConfig;
use crate::connection::GatewayConnection;
use crate::error::GatewayError;
use crate::handlers::{
    CommandHandler, Context, EventDispatcher, HandlerRegistry, MessageDeleteHandler,
    MessageHandler, RestResponder,
};

/// A bot: a REST client, gateway settings and the registered handlers
///
/// ```no_run
/// use curdis_core::{InteractionOption, Snowflake, User};
/// use curdis_gateway::{Bot, Context, GatewayConfig};
/// use curdis_rest::RestClient;
///
/// # async fn example(rest: RestClient) -> Result<(), curdis_gateway::GatewayError> {
/// Bot::new(rest, GatewayConfig::new("token"))
///     .command(
///         "ping",
///         |_: Context, _: User, _: Option<Snowflake>, _: Vec<InteractionOption>| async {
///             "pong".to_string()
///         },
///     )
///     .run()
///     .await
/// # }
/// ```
#[derive(Debug)]
pub struct Bot {
    rest: RestClient,
    config: GatewayConfig,
    registry: HandlerRegistry,
}

impl Bot {
    #[must_use]
    pub fn new(rest: RestClient, config: GatewayConfig) -> Self {
        Self {
            rest,
            config,
            registry: HandlerRegistry::new(),
        }
    }

    /// Authenticate against the REST API and build a bot from configuration
    pub async fn from_config(config: &BotConfig) -> Result<Self, RestError> {
        let rest = RestClient::authenticate(&config.discord).await?;
        Ok(Self::new(
            rest,
            GatewayConfig::from_settings(&config.discord, &config.gateway),
        ))
    }

    /// Handle every created message
    #[must_use]
    pub fn on_message(mut self, handler: impl MessageHandler) -> Self {
        self.registry.set_message_handler(handler);
        self
    }

    /// Handle every deleted message
    #[must_use]
    pub fn on_message_delete(mut self, handler: impl MessageDeleteHandler) -> Self {
        self.registry.set_message_delete_handler(handler);
        self
    }

    /// Answer the application command `name`
    #[must_use]
    pub fn command(mut self, name: impl Into<String>, handler: impl CommandHandler) -> Self {
        self.registry.add_command(name, handler);
        self
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Connect and process events until the connection fails
    ///
    /// Consumes the bot, so each bot drives at most one connection.
    pub async fn run(self) -> Result<(), GatewayError> {
        tracing::info!(commands = ?self.registry.command_names(), "Starting gateway");

        let dispatcher = EventDispatcher::new(
            self.registry,
            Context::new(self.rest.clone()),
            Arc::new(RestResponder::new(self.rest)),
        );
        GatewayConnection::new(self.config, dispatcher).run().await
    }
}
