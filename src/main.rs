mod bot;
mod config;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod util;

use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, MESSAGE_STORE_FILE};
use crate::data::message_store::MessageStore;
use crate::error::AppError;

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG` when set and defaults to info-level output otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub).expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let store = MessageStore::load(MESSAGE_STORE_FILE)?;

    // Serve the liveness endpoint in a separate task
    tokio::spawn(async move {
        if let Err(e) = router::serve(router::LIVENESS_PORT).await {
            error!("Liveness responder error: {}", e);
        }
    });

    // Connect to the gateway; the ready handler starts the status scheduler
    bot::start::start_bot(config, store).await?;

    Ok(())
}
