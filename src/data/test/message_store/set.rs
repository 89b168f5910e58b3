use super::*;
use std::collections::HashMap;

/// Tests that recording an entry writes it to disk immediately.
///
/// Verifies that the backing file exists after `set` and contains the mapping
/// as channel-id and message-id strings.
///
/// Expected: Ok with the file holding one string-to-string entry
#[tokio::test]
async fn persists_entry_to_disk() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let path = store_path(&dir);
    let store = MessageStore::load(&path)?;

    store.set(123456789u64, 987654321u64).await?;

    let raw = std::fs::read_to_string(&path)?;
    let stored: HashMap<String, String> = serde_json::from_str(&raw)?;

    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored.get("123456789").map(String::as_str),
        Some("987654321")
    );

    Ok(())
}

/// Tests replacing the recorded message id for a channel.
///
/// Verifies that a second `set` for the same channel overwrites the previous
/// entry in memory and on disk, leaving a single entry for the channel.
///
/// Expected: Ok with the latest message id stored
#[tokio::test]
async fn overwrites_existing_entry() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let path = store_path(&dir);
    let store = MessageStore::load(&path)?;

    store.set(123456789u64, 111111111u64).await?;
    store.set(123456789u64, 222222222u64).await?;

    assert_eq!(store.get(123456789u64).await?, Some(222222222u64));

    let raw = std::fs::read_to_string(&path)?;
    let stored: HashMap<String, String> = serde_json::from_str(&raw)?;

    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored.get("123456789").map(String::as_str),
        Some("222222222")
    );

    Ok(())
}

/// Tests recording entries for several channels.
///
/// Verifies that entries for different channels do not interfere and that the
/// wholesale rewrite keeps all of them in the file.
///
/// Expected: Ok with both entries readable and persisted
#[tokio::test]
async fn keeps_entries_for_other_channels() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let path = store_path(&dir);
    let store = MessageStore::load(&path)?;

    store.set(111111111u64, 100000000u64).await?;
    store.set(222222222u64, 200000000u64).await?;

    assert_eq!(store.get(111111111u64).await?, Some(100000000u64));
    assert_eq!(store.get(222222222u64).await?, Some(200000000u64));

    let raw = std::fs::read_to_string(&path)?;
    let stored: HashMap<String, String> = serde_json::from_str(&raw)?;

    assert_eq!(stored.len(), 2);

    Ok(())
}
