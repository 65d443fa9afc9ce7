//! KegCalc service — entry point.
//!
//! Exposes the keg-filling calculator over a small Axum REST API. Each
//! calculation is recorded in an in-memory history (newest ten) and then
//! annotated with a short efficiency insight from the Gemini text API.

mod api;
mod config;
mod errors;
mod insight;
mod session;

use std::sync::Arc;

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use insight::GeminiProvider;
use session::CalculationSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; insights will use the fallback text");
    }

    // The per-insight bound is enforced by the session; this only caps the socket.
    let client = Client::builder()
        .timeout(config.insight_timeout() * 2)
        .build()?;

    let shutdown = CancellationToken::new();
    let provider = Arc::new(GeminiProvider::new(client, &config));
    let session = Arc::new(CalculationSession::new(
        provider,
        config.insight_timeout(),
        shutdown.clone(),
    ));

    let app = api::router(Arc::new(api::ApiState { session }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!("API listening on http://{addr} (model: {})", config.gemini_model);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

/// Resolve on Ctrl-C, cancelling any pending insight waits first.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    shutdown.cancel();
}
