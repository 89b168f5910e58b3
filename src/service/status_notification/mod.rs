//! Status notification service for Discord presence reporting.
//!
//! This module provides the `StatusNotificationService` for running one publish
//! cycle: sample the cached presence of every known bot account, render the
//! status embed, edit it in place (or post it) in the status channel, and
//! announce the update in the notification channel.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Report and embed building utilities (pure)
//! - `publish` - Status message publishing and the update announcement

pub mod builder;
pub mod publish;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serenity::{all::OnlineStatus, cache::Cache, http::Http};

use crate::{
    config::Config,
    data::message_store::MessageStore,
    error::AppError,
    model::status::BotPresence,
    router::LIVENESS_PORT,
    service::alert::OfflineAlertTracker,
};

/// Service providing the periodic status publish cycle.
///
/// Holds the Discord HTTP client and cache handle from the gateway connection,
/// the persisted message index, the offline-alert tracker, and the configured
/// channel ids. All fields are cheap to clone (`Arc` internals), so the
/// scheduler clones the whole service into each job invocation.
///
/// Channel ids are kept as the raw configuration strings and parsed where they
/// are used, so a malformed id surfaces as a cycle error rather than a startup
/// failure.
#[derive(Clone)]
pub struct StatusNotificationService {
    /// Discord HTTP client for editing and sending messages.
    http: Arc<Http>,
    /// Gateway cache holding member and presence state for all guilds.
    cache: Arc<Cache>,
    /// Persisted channel-to-message index for the status embed.
    store: MessageStore,
    /// Process-lifetime offline alert deduplication.
    alerts: OfflineAlertTracker,
    /// HTTP client for the best-effort liveness self-ping.
    ping_client: reqwest::Client,
    /// Channel id string of the status embed channel.
    status_channel_id: String,
    /// Channel id string of the update announcement channel.
    notification_channel_id: String,
}

impl StatusNotificationService {
    /// Creates a new StatusNotificationService instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client from the gateway connection
    /// - `cache` - Arc-wrapped gateway cache for presence sampling
    /// - `store` - Persisted message index
    /// - `alerts` - Offline alert tracker shared across cycles
    /// - `config` - Application configuration holding the channel ids
    pub fn new(
        http: Arc<Http>,
        cache: Arc<Cache>,
        store: MessageStore,
        alerts: OfflineAlertTracker,
        config: &Config,
    ) -> Self {
        Self {
            http,
            cache,
            store,
            alerts,
            ping_client: reqwest::Client::new(),
            status_channel_id: config.status_channel_id.clone(),
            notification_channel_id: config.notification_channel_id.clone(),
        }
    }

    /// Runs one publish cycle.
    ///
    /// Samples bot presences, fires offline alerts for newly-offline bots,
    /// renders and publishes the status embed, then announces the update.
    /// The announcement is best-effort; everything else propagates so the
    /// scheduler can log the cycle as failed and retry on the next tick.
    ///
    /// # Returns
    /// - `Ok(())` - Status embed published (edited or newly sent)
    /// - `Err(AppError)` - Cycle failed; no partial rollback is attempted
    pub async fn publish_cycle(&self) -> Result<(), AppError> {
        let now = Utc::now();

        let bots = self.snapshot_bot_presences();
        let entries = builder::build_status_report(&bots, now);
        self.process_offline_alerts(&bots).await;

        let embed = builder::build_status_embed(&entries, now)?;
        self.publish_status_message(embed).await?;

        self.send_update_notification(now).await;

        tracing::info!("Status embed updated for {} bots", entries.len());

        Ok(())
    }

    /// Samples the cached presence of every known bot account.
    ///
    /// Walks all cached guilds and collects their bot members. A bot present in
    /// several guilds is reported once, and a bot with no cached presence is
    /// sampled as offline. The snapshot is sorted by user id so the embed
    /// layout is stable across cycles.
    fn snapshot_bot_presences(&self) -> Vec<BotPresence> {
        let mut seen = HashSet::new();
        let mut bots = Vec::new();

        for guild_id in self.cache.guilds() {
            let Some(guild) = self.cache.guild(guild_id) else {
                continue;
            };

            for (user_id, member) in &guild.members {
                if !member.user.bot {
                    continue;
                }
                if !seen.insert(user_id.get()) {
                    continue;
                }

                let status = guild
                    .presences
                    .get(user_id)
                    .map(|presence| presence.status)
                    .unwrap_or(OnlineStatus::Offline);

                bots.push(BotPresence {
                    user_id: user_id.get(),
                    name: member.user.name.clone(),
                    status,
                });
            }
        }

        bots.sort_by_key(|bot| bot.user_id);

        bots
    }

    /// Fires alerts for bots newly observed offline.
    ///
    /// Each offline bot is pushed through the tracker; the first observation
    /// per process run logs a warning and triggers the liveness self-ping.
    async fn process_offline_alerts(&self, bots: &[BotPresence]) {
        for bot in bots {
            if builder::is_online(bot.status) {
                continue;
            }

            if self.alerts.mark_offline_if_new(bot.user_id).await {
                tracing::warn!("{} went offline", bot.name);
                self.spawn_liveness_ping();
            }
        }
    }

    /// Fires one best-effort GET against the local liveness endpoint.
    ///
    /// Spawned fire-and-forget; errors are discarded. This is a heartbeat hint
    /// for the external uptime monitor, not a reliable notification path.
    fn spawn_liveness_ping(&self) {
        let client = self.ping_client.clone();
        let url = format!("http://localhost:{}", LIVENESS_PORT);

        tokio::spawn(async move {
            let _ = client.get(url).send().await;
        });
    }
}
