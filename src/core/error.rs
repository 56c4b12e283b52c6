//! Error types and error handling for the OpenViking gateway.
//!
//! This module defines the error types used throughout the
//! application and provides conversion to HTTP status codes for
//! API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::core::client::ClientError;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
///
/// The wire contract knows only two failure classes: missing input
/// (400) and everything else (500). Finer variants exist for logging
/// and startup diagnostics.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("OpenViking client is not initialized")]
    ClientNotReady,

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GatewayError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingField(_) => StatusCode::BAD_REQUEST,
            GatewayError::ClientNotReady
            | GatewayError::Client(_)
            | GatewayError::ConfigError(_)
            | GatewayError::IoError(_)
            | GatewayError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("request failed: {message}");
        }

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
