//! Example bot
//!
//! Run with:
//! ```bash
//! DISCORD_TOKEN=... cargo run -p curdis-gateway --bin curdis-bot
//! ```
//!
//! Registers a `ping` command answering `pong` and logs message traffic.

use curdis_common::{try_init_tracing_with_config, AppError, AppResult, BotConfig, TracingConfig};
use curdis_core::{Channel, Command, InteractionOption, Message, Snowflake, User};
use curdis_gateway::{Bot, Context};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Bot stopped");
        std::process::exit(e.exit_code());
    }
}

async fn run(config: BotConfig) -> AppResult<()> {
    info!(name = %config.app.name, env = ?config.app.env, "Starting bot");

    let bot = Bot::from_config(&config).await.map_err(|e| {
        if e.is_unauthorized() {
            AppError::Authentication(e.to_string())
        } else {
            AppError::rest(e)
        }
    })?;

    bot.rest()
        .add_global_command(&Command::chat_input("ping", "Check that the bot is alive"))
        .await
        .map_err(AppError::rest)?;

    bot.command("ping", ping)
        .on_message(log_message)
        .on_message_delete(log_delete)
        .run()
        .await
        .map_err(AppError::gateway)
}

async fn ping(_: Context, user: User, guild_id: Option<Snowflake>, _: Vec<InteractionOption>) -> String {
    info!(user = %user.display_name(), guild_id = ?guild_id, "ping");
    "pong".to_string()
}

async fn log_message(_: Context, message: Message) {
    if message.is_from_bot() {
        return;
    }
    info!(
        channel_id = %message.channel_id,
        author = %message.author.username,
        content = %message.preview(80),
        "Message received"
    );
}

async fn log_delete(_: Context, channel: Channel) {
    info!(channel_id = %channel.id, "Message deleted");
}
