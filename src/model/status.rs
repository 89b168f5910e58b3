//! Domain models for bot presence snapshots and status reports.

use serenity::all::OnlineStatus;

/// Point-in-time presence of a single tracked bot account.
///
/// Sampled from the gateway's in-memory cache once per publish cycle. A bot
/// with no cached presence is sampled as offline rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct BotPresence {
    /// Discord user ID of the bot account.
    pub user_id: u64,
    /// Bot account username shown in the status embed.
    pub name: String,
    /// Cached gateway presence at sampling time.
    pub status: OnlineStatus,
}

/// One rendered block of the status report.
///
/// Built fresh each cycle from a presence snapshot and discarded after the
/// embed is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    /// Bot account username.
    pub name: String,
    /// Whether the bot counts as online (any non-offline presence).
    pub online: bool,
    /// Human-readable uptime text for the embed field.
    pub uptime_label: String,
}
