//! Error types for the registration service.

use crate::form::{Field, Rejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{message}")]
    Validation { field: Field, message: String },

    #[error("Required configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Registrant not found: {0}")]
    NotFound(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            FormError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            FormError::ConfigurationMissing(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "CONFIGURATION_MISSING")
            }
            FormError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            FormError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let field = match &self {
            FormError::Validation { field, .. } => Some(*field),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            field,
        };

        (status, Json(body)).into_response()
    }
}

impl From<Rejection> for FormError {
    fn from(r: Rejection) -> Self {
        FormError::Validation {
            field: r.field,
            message: r.message,
        }
    }
}

/// Result type alias for service errors.
pub type FormResult<T> = Result<T, FormError>;
