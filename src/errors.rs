// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Backend failures are folded into a section's
/// "unavailable" state by the services; what reaches the HTTP layer is
/// request validation and unknown ids.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Backend unreachable: {0}")]
    BackendUnavailable(String),

    #[error("Backend returned status {0}")]
    BackendStatus(u16),

    #[error("Backend payload is not valid JSON: {0}")]
    InvalidPayload(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error")]
    #[allow(dead_code)]
    InternalError,
}

impl GalleryError {
    fn code(&self) -> (StatusCode, &'static str) {
        match self {
            GalleryError::BackendUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "BACKEND_UNAVAILABLE")
            }
            GalleryError::BackendStatus(_) => (StatusCode::BAD_GATEWAY, "BACKEND_STATUS"),
            GalleryError::InvalidPayload(_) => (StatusCode::BAD_GATEWAY, "INVALID_PAYLOAD"),
            GalleryError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            GalleryError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            GalleryError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// Convert GalleryError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for GalleryError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = self.code();

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GalleryError::BackendStatus(500).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GalleryError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GalleryError::ValidationError("count".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_message() {
        let err = GalleryError::BackendStatus(503);
        assert_eq!(err.to_string(), "Backend returned status 503");
    }
}
