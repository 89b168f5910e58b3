//! Status report and embed building utilities.
//!
//! This module provides pure helper functions for classifying presences,
//! building report entries, and constructing the Discord embeds for the status
//! message and the update announcement. Everything here is a function of its
//! inputs so it can be exercised without a gateway connection.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedAuthor, OnlineStatus, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::status::{BotPresence, StatusEntry},
};

/// Accent color for the status and announcement embeds.
const EMBED_COLOR: u32 = 0xe74c3c;

/// Uptime text shown for offline bots.
const OFFLINE_UPTIME_LABEL: &str = "0 seconds";

/// Classifies a presence status as online.
///
/// Any non-offline status counts as online; invisible appears to other users
/// as offline and is classified the same way.
pub fn is_online(status: OnlineStatus) -> bool {
    !matches!(status, OnlineStatus::Offline | OnlineStatus::Invisible)
}

/// Builds the per-bot report entries for a presence snapshot.
///
/// Produces exactly one entry per bot, preserving snapshot order. Online bots
/// get a Discord relative-timestamp uptime label; offline bots get a constant
/// zero label.
///
/// # Arguments
/// - `bots` - Presence snapshot sampled from the gateway cache
/// - `now` - Cycle timestamp used for the relative uptime labels
pub fn build_status_report(bots: &[BotPresence], now: DateTime<Utc>) -> Vec<StatusEntry> {
    bots.iter()
        .map(|bot| {
            let online = is_online(bot.status);

            StatusEntry {
                name: bot.name.clone(),
                online,
                uptime_label: uptime_label(online, now),
            }
        })
        .collect()
}

/// Produces the uptime label for a report entry.
///
/// Online bots render as a Discord relative timestamp anchored at the cycle
/// time; offline bots render the constant zero label.
fn uptime_label(online: bool, now: DateTime<Utc>) -> String {
    if online {
        format!("<t:{}:R>", now.timestamp())
    } else {
        OFFLINE_UPTIME_LABEL.to_string()
    }
}

/// Builds the status embed with one field per report entry.
///
/// # Arguments
/// - `entries` - Report entries in display order
/// - `now` - Cycle timestamp for the embed timestamp
///
/// # Returns
/// - `Ok(CreateEmbed)` - Built status embed
/// - `Err(AppError::InternalErr)` - Cycle timestamp out of Discord's range
pub fn build_status_embed(
    entries: &[StatusEntry],
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .author(CreateEmbedAuthor::new("Bot Status Monitor"))
        .color(EMBED_COLOR)
        .timestamp(discord_timestamp(now)?);

    for entry in entries {
        embed = embed.field(format!("• {}", entry.name), status_field_value(entry), false);
    }

    Ok(embed)
}

/// Renders the field body for one report entry.
///
/// A code-fenced online/offline marker followed by the uptime line and a
/// zero-width-space spacer between fields.
fn status_field_value(entry: &StatusEntry) -> String {
    let marker = if entry.online {
        "```🟢 Online```"
    } else {
        "```🟥 Offline```"
    };

    format!("{}\n**• Uptime:** {}\n\u{200b}", marker, entry.uptime_label)
}

/// Builds the announcement embed pointing at the status channel.
///
/// # Arguments
/// - `status_channel_id` - Channel id of the status embed, linked in the body
/// - `now` - Cycle timestamp for the embed timestamp
///
/// # Returns
/// - `Ok(CreateEmbed)` - Built announcement embed
/// - `Err(AppError::InternalErr)` - Cycle timestamp out of Discord's range
pub fn build_notification_embed(
    status_channel_id: u64,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let embed = CreateEmbed::new()
        .title("🔔 Bot Status Updated")
        .description(format!(
            "All bot statuses have been checked and the status message has been updated. <#{}>",
            status_channel_id
        ))
        .color(EMBED_COLOR)
        .timestamp(discord_timestamp(now)?);

    Ok(embed)
}

/// Converts the cycle timestamp to a Discord embed timestamp.
fn discord_timestamp(now: DateTime<Utc>) -> Result<Timestamp, AppError> {
    let unix = now.timestamp();

    let timestamp =
        Timestamp::from_unix_timestamp(unix).map_err(|e| InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        })?;

    Ok(timestamp)
}
