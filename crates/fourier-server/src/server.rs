use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use fourier_store::{write_status, FileStore, ServerStatus, StorageLayout};

use crate::config::ServerConfig;
use crate::error::GatewayResult;
use crate::router::build_router;
use crate::state::AppState;

/// FourierDB HTTP server.
pub struct FourierServer {
    config: ServerConfig,
}

impl FourierServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve requests until interrupted.
    ///
    /// Bootstraps the storage layout and records running status before
    /// accepting connections; once a ctrl-c shutdown drains, the status
    /// record is rewritten as stopped.
    pub async fn serve(self) -> GatewayResult<()> {
        let layout = StorageLayout::from_root(&self.config.root);
        let store = FileStore::open(layout.clone())?;
        write_status(&layout, &ServerStatus::running(self.config.port))?;

        let state = AppState::new(Arc::new(store));
        let app = build_router(state);
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        info!("fourier server listening on {}", self.config.bind_addr());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        write_status(&layout, &ServerStatus::stopped())?;
        info!("fourier server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
