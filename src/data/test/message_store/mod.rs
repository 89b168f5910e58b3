use crate::data::message_store::MessageStore;
use crate::error::AppError;
use std::path::PathBuf;
use tempfile::TempDir;

mod get;
mod load;
mod set;

/// Returns a store path inside the temp directory for a test.
fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("bot_embed_messages.json")
}
