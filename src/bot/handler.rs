//! Gateway event handler.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{ActivityData, Context, EventHandler, Ready};
use serenity::async_trait;

use crate::{
    config::Config,
    data::message_store::MessageStore,
    scheduler::status_updates,
    service::{alert::OfflineAlertTracker, status_notification::StatusNotificationService},
};

/// Discord gateway event handler.
///
/// Holds the configuration and shared state needed to assemble the status
/// notification service once the gateway reports ready.
pub struct Handler {
    config: Config,
    store: MessageStore,
    alerts: OfflineAlertTracker,
    scheduler_started: AtomicBool,
}

impl Handler {
    /// Creates a new Handler instance.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `store` - Persisted message index loaded at startup
    pub fn new(config: Config, store: MessageStore) -> Self {
        Self {
            config,
            store,
            alerts: OfflineAlertTracker::new(),
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord.
    ///
    /// The first ready event starts the status update scheduler; ready fires
    /// again on gateway reconnects, which only log.
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("Watching bot statuses")));

        if self.scheduler_started.swap(true, Ordering::SeqCst) {
            return;
        }

        let service = StatusNotificationService::new(
            ctx.http.clone(),
            ctx.cache.clone(),
            self.store.clone(),
            self.alerts.clone(),
            &self.config,
        );

        tokio::spawn(async move {
            if let Err(e) = status_updates::start_scheduler(service).await {
                tracing::error!("Status update scheduler error: {}", e);
            }
        });
    }
}
