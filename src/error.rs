//! Registry error types with HTTP status code mapping.
//!
//! [`RegistryError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON error body compatible with
//! existing clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::UserId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "detail": "One or more medicines not found",
///   "missing": ["Aspirin"]
/// }
/// ```
/// `missing` is only present under the strict match policy, listing the
/// medicine names that failed to resolve.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
    /// Medicine names that did not resolve (strict match policy only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant             | HTTP Status               |
/// |---------------------|---------------------------|
/// | `UserNotFound`      | 404 Not Found             |
/// | `MedicineNotFound`  | 404 Not Found             |
/// | `Validation`        | 422 Unprocessable Entity  |
/// | `Storage`           | 500 Internal Server Error |
/// | `Migration`         | 500 Internal Server Error |
/// | `Internal`          | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// User with the given ID does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// None of the requested medicines exist, or (under the strict match
    /// policy) at least one of them does not.
    #[error("medicines not found: {missing:?}")]
    MedicineNotFound {
        /// Requested names with no matching medicine.
        missing: Vec<String>,
    },

    /// Request validation failed.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Datastore failure (connection, constraint, I/O).
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Schema migration failure at startup.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound(_) | Self::MedicineNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Storage(_) | Self::Migration(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the client-facing `detail` string.
    ///
    /// Server-side failures get a generic message; their cause is logged
    /// instead of being sent to the caller.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::UserNotFound(_) => "User not found".to_string(),
            Self::MedicineNotFound { .. } => "One or more medicines not found".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Storage(_) | Self::Migration(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl From<validator::ValidationErrors> for RegistryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let detail = self.detail();
        let missing = match self {
            Self::MedicineNotFound { missing } => missing,
            _ => Vec::new(),
        };
        let mut response = axum::Json(ErrorResponse { detail, missing }).into_response();
        *response.status_mut() = status;
        response
    }
}
