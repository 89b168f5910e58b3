//! Status message publishing and update announcements.
//!
//! Edit-or-send handling for the status embed and the best-effort announcement
//! in the notification channel.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, MessageId};

use crate::{error::AppError, util::parse::parse_u64_from_string};

use super::{builder, StatusNotificationService};

impl StatusNotificationService {
    /// Publishes the status embed to the status channel.
    ///
    /// If the message index holds an id for the channel, editing that message
    /// is always attempted first. A failed edit (for example the message was
    /// deleted externally) is logged and recovered by sending a replacement
    /// and re-indexing it. When no id is indexed, a new message is sent and
    /// its id recorded immediately, before any other work in the cycle.
    ///
    /// # Arguments
    /// - `embed` - Rendered status embed for this cycle
    ///
    /// # Returns
    /// - `Ok(())` - Embed edited in place or newly sent and indexed
    /// - `Err(AppError)` - Malformed channel id, send failure, or index write failure
    pub(super) async fn publish_status_message(&self, embed: CreateEmbed) -> Result<(), AppError> {
        let channel_id = ChannelId::new(parse_u64_from_string(self.status_channel_id.clone())?);

        if let Some(message_id) = self.store.get(channel_id.get()).await? {
            let edit = EditMessage::new().embed(embed.clone());

            match self
                .http
                .edit_message(channel_id, MessageId::new(message_id), &edit, vec![])
                .await
            {
                Ok(_) => {
                    tracing::info!("Edited status embed in channel {}", channel_id);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to edit status message {} in channel {}: {}; sending a replacement",
                        message_id,
                        channel_id,
                        e
                    );
                }
            }
        }

        let message = channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        self.store.set(channel_id.get(), message.id.get()).await?;

        tracing::info!(
            "Posted new status embed {} in channel {}",
            message.id,
            channel_id
        );

        Ok(())
    }

    /// Announces the status update in the notification channel.
    ///
    /// Sent unconditionally after every publish, including pure edit cycles.
    /// Best-effort: any failure is logged and discarded so a broken
    /// notification channel never fails the cycle.
    ///
    /// # Arguments
    /// - `now` - Cycle timestamp for the announcement embed
    pub(super) async fn send_update_notification(&self, now: DateTime<Utc>) {
        let status_channel_id = match parse_u64_from_string(self.status_channel_id.clone()) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Skipping update notification: {}", e);
                return;
            }
        };

        let notification_channel_id =
            match parse_u64_from_string(self.notification_channel_id.clone()) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("Skipping update notification: {}", e);
                    return;
                }
            };

        let embed = match builder::build_notification_embed(status_channel_id, now) {
            Ok(embed) => embed,
            Err(e) => {
                tracing::warn!("Skipping update notification: {}", e);
                return;
            }
        };

        if let Err(e) = ChannelId::new(notification_channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await
        {
            tracing::warn!(
                "Failed to send update notification to channel {}: {}",
                notification_channel_id,
                e
            );
        }
    }
}
