use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::message_store::MessageStore;
use crate::error::AppError;

/// Starts the Discord gateway client in a blocking manner
///
/// This function creates and starts the gateway client with the intents needed
/// for presence tracking. It blocks until the connection shuts down, so it
/// should be the last thing the main task awaits.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and channel ids
/// - `store` - Persisted message index for the status embed
///
/// # Returns
/// - `Ok(())` if the client runs and shuts down cleanly
/// - `Err(AppError)` if client initialization or connection fails
pub async fn start_bot(config: Config, store: MessageStore) -> Result<(), AppError> {
    // GUILD_MEMBERS and GUILD_PRESENCES are privileged intents - both must be
    // enabled in the Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_PRESENCES;

    let token = config.bot_token.clone();
    let handler = Handler::new(config, store);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord gateway client...");

    // Start the client (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
