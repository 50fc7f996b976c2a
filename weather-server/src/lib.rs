//! HTTP layer for the weather proxy.
//!
//! Routes:
//! - `GET /api/weather/{city}`: resolved report as JSON, or `{"error": ...}`
//! - `GET /`: redirect to `/index.html`
//! - anything else: static files from the configured public directory

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use weather_core::Config;

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

/// Bind `0.0.0.0:{port}` and serve until the process is stopped.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    if !config.has_api_key() {
        warn!("ACCUWEATHER_API_KEY is not set; upstream requests will be rejected");
    }

    let port = config.port;
    let app = create_router(AppState::from_config(config)?);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Weather server listening at http://localhost:{port}");
    axum::serve(listener, app).await.context("HTTP server terminated")?;

    Ok(())
}
