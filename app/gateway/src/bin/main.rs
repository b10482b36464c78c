//! Kismet gateway binary entry point.
//!
//! Loads configuration from the TOML file named on the command line, or
//! from the environment when none is given, builds the provider router and
//! serves until ctrl-c.

use anyhow::Result;
use kismet_gateway::GatewayConfig;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = GatewayConfig::load(&path)?;
            tracing::info!("loaded configuration from {path}");
            config
        }
        None => {
            tracing::info!("no config file given, reading the environment");
            GatewayConfig::from_env()?
        }
    };

    let handle = kismet_gateway::serve(&config).await?;
    tracing::info!("✨ Kismetly server running on port {}", handle.port);

    shutdown_signal().await;
    handle.shutdown().await?;
    tracing::info!("gateway shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
    }
}
