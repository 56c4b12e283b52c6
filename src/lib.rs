//! OpenViking Gateway - HTTP front for context management
//!
//! A small HTTP service in front of the OpenViking context client
//! (resource indexing, memory storage, semantic search) used to feed
//! an AI coding assistant.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, uri
//!   - client (capability trait + HTTP implementation)
//!   - context (best-effort context assembly)
//!   - state (shared client handle + workspace)
//!
//! - **http**: REST adapter (depends on core)
//!   - router, handlers, middleware
//!
//! Every substantive operation delegates to the client; the gateway
//! contributes route wiring, request validation, and JSON shaping.
//! The wire contract knows two failure classes: a missing required
//! field responds 400, any client failure responds 500.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use core::client::{ContextClient, RemoteClient};
pub use core::config::Config;
pub use core::error::{GatewayError, Result};
pub use core::state::AppState;
pub use core::types::*;
