use crate::error::{config::ConfigError, AppError};

/// File the channel-to-message index is persisted to.
pub const MESSAGE_STORE_FILE: &str = "bot_embed_messages.json";

/// Application configuration loaded from the environment.
///
/// Channel ids are kept as strings and parsed where they are used, so a
/// malformed id surfaces as a cycle error when first used rather than as a
/// startup failure.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,

    pub status_channel_id: String,
    pub notification_channel_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            bot_token: std::env::var("BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?,
            status_channel_id: std::env::var("CHANNEL_ID")
                .map_err(|_| ConfigError::MissingEnvVar("CHANNEL_ID".to_string()))?,
            notification_channel_id: std::env::var("NOTIFICATION_CHANNEL_ID")
                .map_err(|_| ConfigError::MissingEnvVar("NOTIFICATION_CHANNEL_ID".to_string()))?,
        })
    }
}
