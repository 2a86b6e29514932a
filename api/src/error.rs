//! Unified error types for the TKM dashboard API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Store and port errors
//! - `AppError`: Application layer errors rendered as HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// A list or aggregation could not be produced. The cause is logged,
    /// never returned to the client.
    #[error("Failed to fetch {resource}: {source}")]
    FetchFailed {
        resource: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Wrap a store failure for `resource`.
    pub fn fetch(resource: &'static str) -> impl FnOnce(DomainError) -> AppError {
        move |source| AppError::FetchFailed { resource, source }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::FetchFailed { resource, source } => {
                tracing::error!(resource = *resource, error = %source, "Fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch {}", resource),
                    None,
                )
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Not found".to_string(), Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
