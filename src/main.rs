//! OpenViking gateway entry point
//!
//! Starts the HTTP server in front of the OpenViking context client.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openviking_gateway::core::client::RemoteClient;
use openviking_gateway::core::config::Config;
use openviking_gateway::core::state::AppState;
use openviking_gateway::http;
use openviking_gateway::ContextClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first; the debug flag decides the default filter
    let config = Config::load()?;

    let default_filter = if config.server.debug {
        "openviking_gateway=debug,tower_http=debug"
    } else {
        "openviking_gateway=info,tower_http=debug"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OpenViking gateway");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    config.log_config();

    // Ensure the workspace directory exists
    std::fs::create_dir_all(&config.workspace.dir)?;

    // Construct and initialize the client; do not open the listener
    // if the handshake fails
    let client = match RemoteClient::from_config(&config.client) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to construct OpenViking client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = client.initialize().await {
        tracing::error!("Failed to initialize OpenViking client: {e}");
        std::process::exit(1);
    }

    tracing::info!(
        "OpenViking client initialized, workspace {:?}",
        config.workspace.dir
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config));
    state.attach(client).await;
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
