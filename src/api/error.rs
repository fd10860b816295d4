use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::services::language_detection_service::DetectionError;

/// Errors surfaced over HTTP. Validation problems carry their message to
/// the caller; internal failures are logged and answered generically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Internal Server Error")]
    Internal(#[source] anyhow::Error),
}

impl From<DetectionError> for ApiError {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::Validation(message) => ApiError::Validation(message),
            DetectionError::Internal(source) => ApiError::Internal(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(source) => {
                error!("Unhandled detection failure: {:#}", source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({
            "error": self.to_string(),
            "timestamp": Utc::now().to_rfc3339(),
        });

        (status, Json(body)).into_response()
    }
}
