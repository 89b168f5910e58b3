//! Offline alert deduplication.
//!
//! This module provides the `OfflineAlertTracker` for deduplicating offline
//! alerts across publish cycles. Retention is process-lifetime only: once a bot
//! has been flagged offline it is never flagged again during the same run, even
//! if it comes back online and drops out again. The set resets on restart.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tracks which bot accounts have already been flagged offline.
///
/// Clones share the same underlying set, so the tracker can be handed to the
/// publisher service while the gateway handler keeps a reference. There is no
/// expiry and no persistence; the retention policy is the process lifetime.
#[derive(Clone)]
pub struct OfflineAlertTracker {
    /// User ids of bots already alerted offline during this run.
    alerted: Arc<RwLock<HashSet<u64>>>,
}

impl OfflineAlertTracker {
    /// Creates a new tracker with no recorded alerts.
    pub fn new() -> Self {
        Self {
            alerted: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Records a bot as offline and reports whether this is the first observation.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the bot observed offline
    ///
    /// # Returns
    /// - `true` - First offline observation for this id; the caller should alert
    /// - `false` - Already alerted for this id during this process run
    pub async fn mark_offline_if_new(&self, user_id: u64) -> bool {
        self.alerted.write().await.insert(user_id)
    }
}

impl Default for OfflineAlertTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the first offline observation for a bot.
    ///
    /// Verifies that the first call for an id reports it as new, which is the
    /// signal to trigger an alert.
    ///
    /// Expected: true on the first call
    #[tokio::test]
    async fn first_observation_returns_true() {
        let tracker = OfflineAlertTracker::new();

        assert!(tracker.mark_offline_if_new(42).await);
    }

    /// Tests repeated offline observations for the same bot.
    ///
    /// Verifies that every call after the first returns false for the same id,
    /// regardless of how many times it is repeated.
    ///
    /// Expected: false on every call after the first
    #[tokio::test]
    async fn repeat_observation_returns_false() {
        let tracker = OfflineAlertTracker::new();

        assert!(tracker.mark_offline_if_new(42).await);
        assert!(!tracker.mark_offline_if_new(42).await);
        assert!(!tracker.mark_offline_if_new(42).await);
    }

    /// Tests that ids are tracked independently.
    ///
    /// Verifies that interleaving calls for different ids does not affect the
    /// once-per-id contract of any of them.
    ///
    /// Expected: true exactly once per id across interleaved calls
    #[tokio::test]
    async fn ids_are_tracked_independently() {
        let tracker = OfflineAlertTracker::new();

        assert!(tracker.mark_offline_if_new(1).await);
        assert!(tracker.mark_offline_if_new(2).await);
        assert!(!tracker.mark_offline_if_new(1).await);
        assert!(tracker.mark_offline_if_new(3).await);
        assert!(!tracker.mark_offline_if_new(2).await);
        assert!(!tracker.mark_offline_if_new(3).await);
    }

    /// Tests deduplication across clones of the tracker.
    ///
    /// Verifies that clones share the underlying set, so an alert recorded
    /// through one clone suppresses the alert on another.
    ///
    /// Expected: false on a clone after the original recorded the id
    #[tokio::test]
    async fn clones_share_recorded_alerts() {
        let tracker = OfflineAlertTracker::new();
        let clone = tracker.clone();

        assert!(tracker.mark_offline_if_new(42).await);
        assert!(!clone.mark_offline_if_new(42).await);
    }
}
