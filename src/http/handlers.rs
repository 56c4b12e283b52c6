//! HTTP request handlers for the OpenViking gateway
//!
//! One handler per endpoint, each a thin adapter around a single
//! client capability: validate required input, delegate, shape the
//! JSON response. The only handler with real logic is
//! [`get_context_handler`], which delegates to [`core::context`].
//!
//! [`core::context`]: crate::core::context

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::context;
use crate::core::error::{GatewayError, Result};
use crate::core::state::AppState;
use crate::core::types::*;
use crate::core::uri::{self, RESOURCES_ROOT};

/// Validate that a required field is present and non-blank
fn require(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::MissingField(field)),
    }
}

/// Health check handler
///
/// Pure function of whether the client handle is attached; never
/// calls the client and never fails.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.is_ready().await {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        workspace: state.workspace().display().to_string(),
    })
}

/// Register a resource (document, code, ...) with the client
pub async fn add_resource_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddResourceRequest>,
) -> Result<Json<AddResourceResponse>> {
    let path = require(req.path, "path")?;

    let client = state.client().await?;
    let added = client.add_resource(&path, &req.name).await?;

    tracing::info!(root_uri = %added.root_uri, "resource added");

    Ok(Json(AddResourceResponse {
        success: true,
        root_uri: added.root_uri,
        message: "resource added".to_string(),
    }))
}

/// List a resource namespace
pub async fn list_resources_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListResourcesParams>,
) -> Result<Json<ListResourcesResponse>> {
    let uri = params.uri.unwrap_or_else(|| RESOURCES_ROOT.to_string());

    let client = state.client().await?;
    let items = client.ls(&uri).await?;

    Ok(Json(ListResourcesResponse {
        success: true,
        items,
    }))
}

/// Semantic search over a resource namespace
pub async fn search_resources_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let query = require(req.query, "query")?;

    let client = state.client().await?;
    let results = client.find(&query, &req.target_uri).await?;

    Ok(Json(SearchResponse {
        success: true,
        results,
    }))
}

/// Read the content behind a URI
pub async fn read_resource_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UriRequest>,
) -> Result<Json<ReadResponse>> {
    let uri = require(req.uri, "uri")?;

    let client = state.client().await?;
    let content = client.read(&uri).await?;

    Ok(Json(ReadResponse {
        success: true,
        content,
    }))
}

/// Fetch the generated abstract for a URI
pub async fn get_abstract_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UriRequest>,
) -> Result<Json<AbstractResponse>> {
    let uri = require(req.uri, "uri")?;

    let client = state.client().await?;
    let r#abstract = client.abstract_of(&uri).await?;

    Ok(Json(AbstractResponse {
        success: true,
        r#abstract,
    }))
}

/// Fetch the generated overview for a URI
pub async fn get_overview_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UriRequest>,
) -> Result<Json<OverviewResponse>> {
    let uri = require(req.uri, "uri")?;

    let client = state.client().await?;
    let overview = client.overview_of(&uri).await?;

    Ok(Json(OverviewResponse {
        success: true,
        overview,
    }))
}

/// Store a memory (preference, habit, ...)
///
/// Memories are registered through the client's resource capability
/// under a name derived from the category and the content length.
pub async fn add_memory_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddMemoryRequest>,
) -> Result<Json<AddMemoryResponse>> {
    let content = require(req.content, "content")?;
    let name = uri::memory_name(&req.category, &content);

    let client = state.client().await?;
    let added = client.add_resource(&content, &name).await?;

    tracing::info!(uri = %added.root_uri, category = %req.category, "memory added");

    Ok(Json(AddMemoryResponse {
        success: true,
        uri: added.root_uri,
        message: "memory added".to_string(),
    }))
}

/// List memories, optionally scoped to one category
pub async fn list_memories_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListMemoriesParams>,
) -> Result<Json<ListMemoriesResponse>> {
    let uri = uri::memories_uri(params.category.as_deref().unwrap_or(""));

    let client = state.client().await?;
    let memories = client.ls(&uri).await?;

    Ok(Json(ListMemoriesResponse {
        success: true,
        memories,
    }))
}

/// Assemble context for an AI coding query
pub async fn get_context_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContextRequest>,
) -> Result<Json<ContextResponse>> {
    let query = require(req.query, "query")?;

    let client = state.client().await?;
    let context = context::assemble(
        client.as_ref(),
        &query,
        req.include_resources,
        req.include_memories,
    )
    .await?;

    Ok(Json(ContextResponse {
        success: true,
        context,
        query,
    }))
}

/// Clear assembled context
///
/// Confirmation-only; the gateway holds no context between requests.
pub async fn clear_context_handler() -> Json<ClearContextResponse> {
    Json(ClearContextResponse {
        success: true,
        message: "context cleared".to_string(),
    })
}

/// Shut the client down
///
/// Takes the handle out of the shared state so the health check turns
/// unhealthy, then closes it. Succeeds even if no client was ever
/// attached.
pub async fn shutdown_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShutdownResponse>> {
    if let Some(client) = state.take_client().await {
        client.close().await?;
    }

    tracing::info!("service shut down");

    Ok(Json(ShutdownResponse {
        message: "service shut down".to_string(),
    }))
}
