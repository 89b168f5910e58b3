//! Error types for the status monitor.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and the
//! failure modes of the external collaborators (Discord client, cron scheduler,
//! filesystem, JSON serialization). Most variants use `#[from]` for automatic
//! error conversion, so fallible functions propagate with `?`.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application.
/// Errors reaching a publish-cycle boundary are logged there and the cycle is
/// treated as failed; errors during startup abort the process.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal invariant violation, such as a malformed stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while reading or writing the message index, or while
    /// binding the liveness listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON serialization error for the persisted message index.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
