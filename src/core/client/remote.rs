//! HTTP-backed OpenViking client
//!
//! Forwards every capability call to an OpenViking daemon. Wire
//! shapes follow the daemon's REST API: envelope objects for listing
//! and search (`{items}`, `{matches}`), raw JSON for content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

use super::{AddedResource, ClientError, ContextClient};
use crate::core::config::ClientConfig;

/// HTTP client for a remote OpenViking daemon
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RemoteClient {
    /// Create a client from gateway configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.endpoint,
            config.api_key.clone().unwrap_or_default(),
            config.timeout_secs,
        )
    }

    /// Create a client with explicit parameters
    pub fn new(base_url: &str, api_key: String, timeout_secs: u64) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Endpoint(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Build a URL for an endpoint
    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Endpoint(format!("{path}: {e}")))
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        let url = self.url(path)?;
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::handle_response(resp).await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        let url = self.url(path)?;
        let resp = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::handle_response(resp).await
    }

    /// Decode a response, turning non-2xx statuses into API errors
    async fn handle_response(resp: reqwest::Response) -> Result<Value, ClientError> {
        let status = resp.status();

        if !status.is_success() {
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| "Unknown error".to_string());

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    /// Pull an array field out of an envelope object, tolerating its absence
    fn array_field(value: Value, field: &str) -> Vec<Value> {
        match value.get(field) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }
}

#[async_trait]
impl ContextClient for RemoteClient {
    async fn initialize(&self) -> Result<(), ClientError> {
        self.post("/api/v1/initialize", json!({})).await?;
        Ok(())
    }

    async fn add_resource(&self, path: &str, name: &str) -> Result<AddedResource, ClientError> {
        let value = self
            .post("/api/v1/resources", json!({ "path": path, "name": name }))
            .await?;

        let root_uri = value
            .get("root_uri")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(AddedResource { root_uri })
    }

    async fn ls(&self, uri: &str) -> Result<Vec<Value>, ClientError> {
        let value = self.get("/api/v1/ls", &[("uri", uri)]).await?;
        Ok(Self::array_field(value, "items"))
    }

    async fn find(&self, query: &str, target_uri: &str) -> Result<Vec<Value>, ClientError> {
        let value = self
            .post(
                "/api/v1/find",
                json!({ "query": query, "target_uri": target_uri }),
            )
            .await?;
        Ok(Self::array_field(value, "matches"))
    }

    async fn read(&self, uri: &str) -> Result<Value, ClientError> {
        self.get("/api/v1/read", &[("uri", uri)]).await
    }

    async fn abstract_of(&self, uri: &str) -> Result<Value, ClientError> {
        self.get("/api/v1/abstract", &[("uri", uri)]).await
    }

    async fn overview_of(&self, uri: &str) -> Result<Value, ClientError> {
        self.get("/api/v1/overview", &[("uri", uri)]).await
    }

    async fn close(&self) -> Result<(), ClientError> {
        self.post("/api/v1/close", json!({})).await?;
        Ok(())
    }
}
