use super::*;

/// Tests loading the store when no backing file exists.
///
/// Verifies that an absent file yields an empty index instead of an error.
///
/// Expected: Ok with no entry for any channel
#[tokio::test]
async fn absent_file_yields_empty_store() -> Result<(), AppError> {
    let dir = TempDir::new()?;

    let store = MessageStore::load(store_path(&dir))?;

    assert_eq!(store.get(123456789u64).await?, None);

    Ok(())
}

/// Tests reloading a store that was previously persisted.
///
/// Verifies that entries written by `set` survive a fresh `load` of the same
/// path, the contract that lets re-runs edit the existing status message.
///
/// Expected: Ok with the recorded message id visible after reload
#[tokio::test]
async fn reloads_persisted_entries() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let path = store_path(&dir);

    let store = MessageStore::load(&path)?;
    store.set(123456789u64, 987654321u64).await?;

    let reloaded = MessageStore::load(&path)?;

    assert_eq!(reloaded.get(123456789u64).await?, Some(987654321u64));

    Ok(())
}

/// Tests loading a store whose backing file is not valid JSON.
///
/// Verifies that a corrupt file surfaces as an error rather than being
/// silently replaced with an empty index.
///
/// Expected: Err from load
#[tokio::test]
async fn rejects_malformed_backing_file() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let path = store_path(&dir);

    std::fs::write(&path, "not json")?;

    let result = MessageStore::load(&path);

    assert!(result.is_err());

    Ok(())
}
