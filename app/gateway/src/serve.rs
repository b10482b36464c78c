//! Shared serve entrypoint, used by the binary and the tests.

use crate::{GatewayConfig, routes, state::AppState};
use anyhow::Result;
use llm::{Client, LLM};
use router::{Registry, Router};
use tokio::sync::oneshot;

/// Handle returned by [`serve`]: the bound port and a shutdown trigger.
pub struct ServeHandle {
    /// The port the gateway is listening on.
    pub port: u16,
    /// Send a value to trigger graceful shutdown.
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Join handle for the server task.
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Build the provider registry from the configured slots and start serving
/// on the configured address.
pub async fn serve(config: &GatewayConfig) -> Result<ServeHandle> {
    let registry = Registry::from_configs(config.providers.iter().cloned(), Client::new());
    serve_with_router(Router::from_registry(registry), &config.bind_address()).await
}

/// Serve an already-built router on `bind`.
///
/// The server runs in a spawned task; call `handle.shutdown()` to stop it.
pub async fn serve_with_router<P: LLM + 'static>(
    router: Router<P>,
    bind: &str,
) -> Result<ServeHandle> {
    let app = routes::router(AppState::new(router));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("gateway listening on {bind} (port {port})");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        port,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    })
}
