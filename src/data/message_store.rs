//! Message index persistence for status embeds.
//!
//! This module provides the `MessageStore` for tracking which message displays
//! the status embed in each channel, so that later cycles edit the existing
//! message in place instead of posting a new one. The index is a JSON object of
//! channel-id strings to message-id strings, loaded once at startup and
//! rewritten wholesale on every update.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::util::parse::parse_u64_from_string;

/// Durable channel-to-message index for status embeds.
///
/// The in-memory map is shared between clones, so the publisher and any
/// concurrent cycle observe the same entries. Every `set` synchronously
/// rewrites the full backing file; there is no partial-write protection, so a
/// crash mid-write can corrupt the store.
#[derive(Clone)]
pub struct MessageStore {
    /// Path of the backing JSON file.
    path: Arc<PathBuf>,
    /// Channel-id string to message-id string, mirroring the file contents.
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MessageStore {
    /// Loads the message index from disk.
    ///
    /// Deserializes the backing file if it exists; an absent file yields an
    /// empty index rather than an error.
    ///
    /// # Arguments
    /// - `path` - Path of the backing JSON file
    ///
    /// # Returns
    /// - `Ok(MessageStore)` - Loaded (or empty) index
    /// - `Err(AppError)` - File exists but could not be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: Arc::new(path),
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Gets the status message id recorded for a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Message id recorded for this channel
    /// - `Ok(None)` - No entry for this channel
    /// - `Err(AppError::InternalErr)` - Stored value is not a valid id
    pub async fn get(&self, channel_id: u64) -> Result<Option<u64>, AppError> {
        let entries = self.entries.read().await;

        match entries.get(&channel_id.to_string()) {
            Some(message_id) => Ok(Some(parse_u64_from_string(message_id.clone())?)),
            None => Ok(None),
        }
    }

    /// Records the status message id for a channel and persists the index.
    ///
    /// Inserts or replaces the entry and synchronously rewrites the whole
    /// backing file before returning, so a later failure in the same cycle
    /// cannot lose the mapping.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID
    /// - `message_id` - Discord message ID of the status embed
    ///
    /// # Returns
    /// - `Ok(())` - Entry recorded and file written
    /// - `Err(AppError)` - Serialization or filesystem write failure
    pub async fn set(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(channel_id.to_string(), message_id.to_string());

        let raw = serde_json::to_string_pretty(&*entries)?;
        std::fs::write(self.path.as_ref(), raw)?;

        Ok(())
    }
}
