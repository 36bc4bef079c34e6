//! Landing Page Content Server Library
//!
//! Serves the landing page document and lets a single administrator edit it
//! and upload a profile avatar. Everything is persisted as plain files in
//! one data directory.

pub mod content;
pub mod core;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::{AppState, ServerConfig};

pub use crate::core::router;

/// Install the global tracing subscriber. Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "landing_server=info,tower_http=info".into());

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        // Already set, ignore
    }
}

/// Full application with logging and CORS layers.
pub fn app(state: AppState) -> axum::Router {
    router(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env();

    info!("=== Landing Server ===");
    info!("Data directory: {:?}", config.data_dir);

    let state = AppState::open(config.clone()).await?;
    info!("Stores initialized");

    let app = app(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received.");
    }
}
