//! Request and response types for the OpenViking gateway.
//!
//! Required fields deserialize as `Option` so that a missing value
//! reaches the handler's validation (which owns the 400 response)
//! instead of failing in the extractor. Payload fields coming back
//! from the client stay opaque `serde_json::Value`s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::uri::RESOURCES_ROOT;

fn default_resource_name() -> String {
    "default".to_string()
}

fn default_target_uri() -> String {
    RESOURCES_ROOT.to_string()
}

fn default_memory_category() -> String {
    "general".to_string()
}

fn default_true() -> bool {
    true
}

/// Request to register a resource
#[derive(Debug, Clone, Deserialize)]
pub struct AddResourceRequest {
    /// Filesystem path of the resource
    pub path: Option<String>,

    /// Name to register the resource under
    #[serde(default = "default_resource_name")]
    pub name: String,
}

/// Query parameters for listing resources
#[derive(Debug, Clone, Deserialize)]
pub struct ListResourcesParams {
    /// Namespace to list; defaults to the resources root
    pub uri: Option<String>,
}

/// Request to search resources
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Search query string
    pub query: Option<String>,

    /// Namespace to search within
    #[serde(default = "default_target_uri")]
    pub target_uri: String,
}

/// Request addressing a single URI (read, abstract, overview)
#[derive(Debug, Clone, Deserialize)]
pub struct UriRequest {
    pub uri: Option<String>,
}

/// Request to store a memory
#[derive(Debug, Clone, Deserialize)]
pub struct AddMemoryRequest {
    /// Free-text memory content
    pub content: Option<String>,

    /// Memory category
    #[serde(default = "default_memory_category")]
    pub category: String,
}

/// Query parameters for listing memories
#[derive(Debug, Clone, Deserialize)]
pub struct ListMemoriesParams {
    /// Category to scope to; absent or empty lists all memories
    pub category: Option<String>,
}

/// Request to assemble context for a query
#[derive(Debug, Clone, Deserialize)]
pub struct ContextRequest {
    pub query: Option<String>,

    #[serde(default = "default_true")]
    pub include_memories: bool,

    #[serde(default = "default_true")]
    pub include_resources: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` when the client handle is attached
    pub status: String,

    /// Configured workspace path
    pub workspace: String,
}

/// Response from registering a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResourceResponse {
    pub success: bool,
    pub root_uri: String,
    pub message: String,
}

/// Response from listing a namespace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResourcesResponse {
    pub success: bool,
    pub items: Vec<Value>,
}

/// Response from a resource search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<Value>,
}

/// Response carrying resource content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResponse {
    pub success: bool,
    pub content: Value,
}

/// Response carrying a resource abstract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbstractResponse {
    pub success: bool,
    pub r#abstract: Value,
}

/// Response carrying a resource overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub success: bool,
    pub overview: Value,
}

/// Response from storing a memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemoryResponse {
    pub success: bool,
    pub uri: String,
    pub message: String,
}

/// Response from listing memories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMemoriesResponse {
    pub success: bool,
    pub memories: Vec<Value>,
}

/// Response from context assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextResponse {
    pub success: bool,
    pub context: String,
    pub query: String,
}

/// Response from clearing context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearContextResponse {
    pub success: bool,
    pub message: String,
}

/// Response from shutting the service down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownResponse {
    pub message: String,
}
