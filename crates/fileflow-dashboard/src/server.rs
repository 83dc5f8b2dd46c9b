//! Dashboard server implementation.

use fileflow_core::FileFlowConfig;
use tokio::net::TcpListener;

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;

/// The dashboard server.
pub struct DashboardServer {
    config: FileFlowConfig,
}

impl DashboardServer {
    /// Create a new dashboard server with the given configuration.
    pub fn new(config: FileFlowConfig) -> Self {
        Self { config }
    }

    /// Start the dashboard server and serve until Ctrl-C.
    pub async fn run(self) -> Result<(), DashboardError> {
        let addr = self.config.dashboard.bind_addr();
        let auth_enabled = self.config.dashboard.auth.enabled;
        let state = AppState::new(self.config)?;
        let app = routes::create_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(format!("{addr}: {e}")))?;

        tracing::info!(address = %addr, auth = auth_enabled, "Starting FileFlow dashboard");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        tracing::info!("Dashboard stopped");
        Ok(())
    }

    /// Get the configured listen port.
    pub fn port(&self) -> u16 {
        self.config.dashboard.port
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = DashboardServer::new(FileFlowConfig::default());
        assert_eq!(server.port(), 9002);
    }
}
