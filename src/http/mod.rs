//! HTTP REST adapter
//!
//! Depends only on core/. Exposes the gateway endpoints via the Axum
//! web framework.

pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::state::AppState;

/// Build the gateway router
///
/// Shared between the server binary and the integration tests so both
/// exercise the same routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/resource/add", post(add_resource_handler))
        .route("/api/resource/list", get(list_resources_handler))
        .route("/api/resource/search", post(search_resources_handler))
        .route("/api/resource/read", post(read_resource_handler))
        .route("/api/resource/abstract", post(get_abstract_handler))
        .route("/api/resource/overview", post(get_overview_handler))
        .route("/api/memory/add", post(add_memory_handler))
        .route("/api/memory/list", get(list_memories_handler))
        .route("/api/context/get", post(get_context_handler))
        .route("/api/context/clear", post(clear_context_handler))
        .route("/shutdown", post(shutdown_handler))
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
