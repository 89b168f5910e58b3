//! Cron jobs for automated tasks.
//!
//! The only scheduled task is the hourly status update cycle; it is started
//! after the gateway reports ready and runs for the process lifetime.

pub mod status_updates;
