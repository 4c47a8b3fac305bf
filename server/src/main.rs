//! Job Insights Server
//!
//! Exposes salary, keyword and listing queries over a job postings dataset
//! as a REST API using Axum. Every request reads the dataset fresh.

mod api;
mod config;

use anyhow::{Context, Result};
use api::AppState;
use config::ServerConfig;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Example: RUST_LOG=server=debug,common=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("server=info,common=info")),
        )
        .init();

    tracing::info!("🚀 Starting Job Insights Server");

    let config = ServerConfig::from_env()?;
    if !config.data_path.exists() {
        tracing::warn!(
            path = %config.data_path.display(),
            "dataset not found; queries will fail until it exists"
        );
    }

    let state = Arc::new(AppState {
        data_path: config.data_path.clone(),
    });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;

    tracing::info!(addr = %config.addr, data = %config.data_path.display(), "🌐 Server running");
    tracing::info!("   Try: curl 'http://{}/salary/max'", config.addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
