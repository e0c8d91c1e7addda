//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::models::TopologyError;
use crate::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Repository error
    Repository(RepositoryError),
    /// Rejected section change
    Topology(TopologyError),
}

impl AppError {
    /// Status code and body for this error.
    pub fn to_parts(&self) -> (StatusCode, ApiError) {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg.clone()))
            }
            AppError::Topology(e) => (
                StatusCode::BAD_REQUEST,
                ApiError::new(e.code(), e.to_string()),
            ),
            AppError::Repository(e) => {
                let (status, code) = match e {
                    RepositoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    RepositoryError::ValidationError { .. } => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
                    }
                    RepositoryError::TransactionError { .. } => (StatusCode::CONFLICT, "CONFLICT"),
                    RepositoryError::ConnectionError { .. } => {
                        (StatusCode::SERVICE_UNAVAILABLE, "REPOSITORY_UNAVAILABLE")
                    }
                    RepositoryError::ConfigurationError { .. }
                    | RepositoryError::InternalError { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR")
                    }
                };
                let mut body = ApiError::new(code, e.to_string());
                if let Some(details) = &e.context().details {
                    body = body.with_details(details.clone());
                }
                (status, body)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_parts();
        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        } else {
            tracing::debug!(code = %error.code, "{}", error.message);
        }
        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<TopologyError> for AppError {
    fn from(err: TopologyError) -> Self {
        AppError::Topology(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repository(e) => AppError::Repository(e),
            ServiceError::Topology(e) => AppError::Topology(e),
            ServiceError::InvalidRequest(msg) => AppError::BadRequest(msg),
        }
    }
}
