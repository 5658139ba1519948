//! zookeepr API server.
//!
//! Loads the animal collection from the data file, then serves it over HTTP
//! until interrupted.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zookeepr_engine::RecordStore;
use zookeepr_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let store = RecordStore::open(&config.data_file).with_context(|| {
        format!(
            "failed to load animals from {}",
            config.data_file.display()
        )
    })?;
    info!(
        "Serving {} animals from {}",
        store.len(),
        config.data_file.display()
    );

    let app = router(AppState::new(store));
    let listener = config
        .bind()
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    info!("API server now on port {}!", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
