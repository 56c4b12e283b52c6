//! Core domain logic (protocol-agnostic)
//!
//! Everything the HTTP adapter needs that is independent of transport:
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request/response DTOs
//! - **uri**: Viking namespace roots and name helpers
//! - **client**: OpenViking capability trait + HTTP implementation
//! - **context**: Best-effort context assembly
//! - **state**: Shared application state

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod state;
pub mod types;
pub mod uri;

// Re-export key types for convenience
pub use client::{ContextClient, RemoteClient};
pub use config::Config;
pub use error::{GatewayError, Result};
pub use state::AppState;
