use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use bt_server::{Config, router};

#[tokio::main]
async fn main() -> Result<()> {
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = Config::load().context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router())
        .await
        .context("server error")?;

    Ok(())
}
