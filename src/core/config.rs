//! Configuration management for the OpenViking gateway.
//!
//! Settings come from an optional TOML file with environment
//! variables layered on top. The environment is authoritative since
//! deployments configure the service through it.

use crate::core::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port for the listener
    #[serde(default = "default_port")]
    pub port: u16,

    /// Verbose/debug logging
    #[serde(default)]
    pub debug: bool,
}

/// Workspace configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Filesystem root for the OpenViking client's storage
    #[serde(default = "default_workspace_dir")]
    pub dir: PathBuf,
}

/// Upstream OpenViking client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the OpenViking daemon
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API credential, required at startup
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_workspace_dir() -> PathBuf {
    PathBuf::from("./openviking_data")
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            dir: default_workspace_dir(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("OPENVIKING_CONFIG") {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("OPENVIKING_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("OPENVIKING_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(debug) = env::var("OPENVIKING_DEBUG") {
            self.server.debug = debug.eq_ignore_ascii_case("true") || debug == "1";
        }

        if let Ok(dir) = env::var("OPENVIKING_WORKSPACE") {
            self.workspace.dir = PathBuf::from(dir);
        }

        if let Ok(endpoint) = env::var("OPENVIKING_ENDPOINT") {
            self.client.endpoint = endpoint;
        }
        if let Ok(key) = env::var("DASHSCOPE_API_KEY") {
            self.client.api_key = Some(key);
        }
        if let Ok(timeout) = env::var("OPENVIKING_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.client.timeout_secs = t;
            }
        }
    }

    /// Validate configuration values
    ///
    /// The API credential is mandatory: the process must not come up
    /// without one.
    pub fn validate(&self) -> Result<()> {
        match &self.client.api_key {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(GatewayError::ConfigError(
                    "DASHSCOPE_API_KEY is required".to_string(),
                ));
            }
        }

        if self.client.endpoint.trim().is_empty() {
            return Err(GatewayError::ConfigError(
                "Client endpoint must be non-empty".to_string(),
            ));
        }

        if self.client.timeout_secs == 0 {
            return Err(GatewayError::ConfigError(
                "Client timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Debug: {}", self.server.debug);
        tracing::info!("  Workspace: {:?}", self.workspace.dir);
        tracing::info!("  Client endpoint: {}", self.client.endpoint);
        tracing::info!("  Client timeout: {}s", self.client.timeout_secs);
        tracing::info!("  API key: <redacted>");
    }
}
