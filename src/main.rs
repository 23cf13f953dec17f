mod config;
mod data;
mod error;
mod server;

use anyhow::Context;
use config::Config;
use data::LlamaClient;
use dotenv::dotenv;
use server::{build_router, AppState};
use tracing_subscriber::EnvFilter;

/// Service entry point.
///
/// 1. Load environment variables from a `.env` file, if present
/// 2. Initialize logging (`RUST_LOG`, defaulting to `info`)
/// 3. Read the configuration and build the upstream client
/// 4. Serve the merge handler until the process is stopped
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let state = AppState::new(LlamaClient::new(config.upstream_base_url.clone()));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!(
        listen = %config.listen_addr,
        upstream = %config.upstream_base_url,
        "unichain-tvl starting"
    );

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
