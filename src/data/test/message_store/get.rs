use super::*;

/// Tests looking up a channel with no recorded message.
///
/// Verifies that a channel absent from the index reports no message id, which
/// is the signal for the publisher to send a new status message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_channel() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let store = MessageStore::load(store_path(&dir))?;

    store.set(111111111u64, 222222222u64).await?;

    assert_eq!(store.get(999999999u64).await?, None);

    Ok(())
}

/// Tests looking up a recorded entry.
///
/// Verifies that `get` returns the message id previously recorded for the
/// channel.
///
/// Expected: Ok(Some(message_id))
#[tokio::test]
async fn returns_recorded_message_id() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let store = MessageStore::load(store_path(&dir))?;

    store.set(123456789u64, 987654321u64).await?;

    assert_eq!(store.get(123456789u64).await?, Some(987654321u64));

    Ok(())
}

/// Tests looking up an entry whose stored value is not a numeric id.
///
/// Verifies that a corrupt stored message id surfaces as an error at the read
/// site instead of being dropped.
///
/// Expected: Err from get
#[tokio::test]
async fn errors_on_non_numeric_message_id() -> Result<(), AppError> {
    let dir = TempDir::new()?;
    let path = store_path(&dir);

    std::fs::write(&path, r#"{"123456789": "not-a-number"}"#)?;
    let store = MessageStore::load(&path)?;

    let result = store.get(123456789u64).await;

    assert!(result.is_err());

    Ok(())
}
