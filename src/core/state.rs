//! Shared application state for the gateway.
//!
//! Holds the one piece of process-wide state: the OpenViking client
//! handle plus the configured workspace path. The handle is written
//! exactly twice in the process lifetime, attached at startup and
//! taken at shutdown; handlers only ever clone the `Arc` out.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::client::ContextClient;
use crate::core::config::Config;
use crate::core::error::{GatewayError, Result};

/// Shared state for Axum handlers
pub struct AppState {
    client: RwLock<Option<Arc<dyn ContextClient>>>,
    workspace: PathBuf,
}

impl AppState {
    /// Create state without a client attached
    pub fn new(config: Config) -> Self {
        Self {
            client: RwLock::new(None),
            workspace: config.workspace.dir,
        }
    }

    /// Attach the client handle (startup)
    pub async fn attach(&self, client: Arc<dyn ContextClient>) {
        *self.client.write().await = Some(client);
    }

    /// Get the client handle, failing if none is attached
    pub async fn client(&self) -> Result<Arc<dyn ContextClient>> {
        self.client
            .read()
            .await
            .clone()
            .ok_or(GatewayError::ClientNotReady)
    }

    /// Take the client handle out of the state (shutdown)
    pub async fn take_client(&self) -> Option<Arc<dyn ContextClient>> {
        self.client.write().await.take()
    }

    /// Whether a client handle is attached
    pub async fn is_ready(&self) -> bool {
        self.client.read().await.is_some()
    }

    /// Configured workspace path
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}
