//! Response bodies shared by every endpoint, and the HTTP mapping of [`AppError`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Plain acknowledgement body (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            // Shares the 404 status with NotFound; the code keeps them apart.
            ErrorKind::ContentGone => (StatusCode::NOT_FOUND, "CONTENT_GONE"),
            ErrorKind::Expired => (StatusCode::GONE, "EXPIRED"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::ExternalService => (StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE_ERROR"),
            ErrorKind::Database | ErrorKind::Storage => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(kind = %self.kind, error = %self.message, "Request failed");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_maps_to_gone() {
        let (status, code) = AppError::expired("lapsed").status_and_code();
        assert_eq!(status, StatusCode::GONE);
        assert_eq!(code, "EXPIRED");
    }

    #[test]
    fn test_content_gone_and_not_found_share_status_but_not_code() {
        let (gone_status, gone_code) = AppError::content_gone("deleted").status_and_code();
        let (missing_status, missing_code) = AppError::not_found("unknown").status_and_code();
        assert_eq!(gone_status, missing_status);
        assert_ne!(gone_code, missing_code);
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        let response = AppError::database("pool exhausted").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::validation("bad kind").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
