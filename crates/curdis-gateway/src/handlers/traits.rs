//! Handler traits
//!
//! Implement them on your own types, or pass async closures: each trait has a
//! blanket impl for `Fn(..) -> impl Future`.

use std::future::Future;

use async_trait::async_trait;
use curdis_core::{Channel, InteractionOption, Message, Snowflake, User};

use super::Context;

/// Called for every MESSAGE_CREATE
#[async_trait]
pub trait MessageHandler: Send + Sync + 'static {
    async fn handle(&self, ctx: Context, message: Message);
}

/// Called for every MESSAGE_DELETE with a reference to the channel
#[async_trait]
pub trait MessageDeleteHandler: Send + Sync + 'static {
    async fn handle(&self, ctx: Context, channel: Channel);
}

/// Answers one application command
///
/// The returned string becomes the content of the interaction response.
#[async_trait]
pub trait CommandHandler: Send + Sync + 'static {
    async fn handle(
        &self,
        ctx: Context,
        user: User,
        guild_id: Option<Snowflake>,
        options: Vec<InteractionOption>,
    ) -> String;
}

#[async_trait]
impl<F, Fut> MessageHandler for F
where
    F: Fn(Context, Message) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, ctx: Context, message: Message) {
        self(ctx, message).await;
    }
}

#[async_trait]
impl<F, Fut> MessageDeleteHandler for F
where
    F: Fn(Context, Channel) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, ctx: Context, channel: Channel) {
        self(ctx, channel).await;
    }
}

#[async_trait]
impl<F, Fut> CommandHandler for F
where
    F: Fn(Context, User, Option<Snowflake>, Vec<InteractionOption>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = String> + Send + 'static,
{
    async fn handle(
        &self,
        ctx: Context,
        user: User,
        guild_id: Option<Snowflake>,
        options: Vec<InteractionOption>,
    ) -> String {
        self(ctx, user, guild_id, options).await
    }
}
