//! OpenViking client capability interface
//!
//! The gateway never implements context management itself; every
//! substantive operation is delegated through [`ContextClient`]. The
//! production implementation forwards to a daemon over HTTP, tests
//! substitute mocks.

pub mod remote;

pub use remote::RemoteClient;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by an OpenViking client
///
/// The gateway collapses every variant into its 500 class. The
/// variants only aid logging.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("OpenViking request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenViking API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

/// Result of registering a resource
#[derive(Debug, Clone, Deserialize)]
pub struct AddedResource {
    /// Root URI assigned by the client
    pub root_uri: String,
}

/// Capability set required of an OpenViking client
///
/// All payloads beyond `root_uri` are opaque JSON owned by the
/// client; the gateway passes them through unchanged.
#[async_trait]
pub trait ContextClient: Send + Sync {
    /// Perform the client's startup handshake
    async fn initialize(&self) -> Result<(), ClientError>;

    /// Register a resource under the given name
    async fn add_resource(&self, path: &str, name: &str) -> Result<AddedResource, ClientError>;

    /// List the entries of a namespace
    async fn ls(&self, uri: &str) -> Result<Vec<Value>, ClientError>;

    /// Semantic search within a namespace, best matches first
    async fn find(&self, query: &str, target_uri: &str) -> Result<Vec<Value>, ClientError>;

    /// Read the content behind a URI
    async fn read(&self, uri: &str) -> Result<Value, ClientError>;

    /// Fetch the generated abstract for a URI
    async fn abstract_of(&self, uri: &str) -> Result<Value, ClientError>;

    /// Fetch the generated overview for a URI
    async fn overview_of(&self, uri: &str) -> Result<Value, ClientError>;

    /// Release the client's resources
    async fn close(&self) -> Result<(), ClientError>;
}
