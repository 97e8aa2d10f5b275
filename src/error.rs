//! Error taxonomy for the HTTP surface
//!
//! Every failure is terminal for the single request in which it occurs:
//! there are no retries and no compensating actions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result type for server bootstrap operations
pub type RelayResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Failures surfaced to HTTP callers
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request carried no usable frame payload
    #[error("No se recibió frame data")]
    MissingPayload,

    /// Unexpected fault while preparing a frame for fan-out
    #[error("Error interno del servidor")]
    Internal(#[from] serde_json::Error),
}

impl RelayError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPayload => StatusCode::BAD_REQUEST,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // The caller only gets the generic message; the detail goes to the log
        if let RelayError::Internal(source) = &self {
            tracing::error!(error = %source, "frame processing failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_payload_is_client_error() {
        let err = RelayError::MissingPayload;

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No se recibió frame data");
    }

    #[test]
    fn test_internal_is_server_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = RelayError::Internal(source);

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error interno del servidor");
    }
}
