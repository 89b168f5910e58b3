//! Liveness endpoint for external uptime monitoring.
//!
//! Serves a fixed "I'm alive" body on a local port. An external uptime monitor
//! polls it, and the publisher fires a best-effort self-ping at it whenever a
//! bot is first observed offline. Every method and path gets the same response;
//! there are no other routes and no auth.

use axum::Router;

use crate::error::AppError;

/// Port the liveness responder listens on.
pub const LIVENESS_PORT: u16 = 3000;

/// Builds the liveness router.
///
/// The fallback catches every method and path, so any request answers with the
/// fixed body.
pub fn router() -> Router {
    Router::new().fallback(liveness)
}

/// Answers uptime-monitor pings with a constant body.
async fn liveness() -> &'static str {
    tracing::debug!("Liveness ping received");

    "Bot Status Monitor is running."
}

/// Serves the liveness responder until process termination.
///
/// # Arguments
/// - `port` - Local port to bind
///
/// # Returns
/// - `Err(AppError::IoErr)` - Failed to bind or serve; never returns Ok while healthy
pub async fn serve(port: u16) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Liveness responder listening on port {}", port);

    axum::serve(listener, router()).await?;

    Ok(())
}
