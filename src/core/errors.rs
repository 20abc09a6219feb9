use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("embedding service error: {0}")]
    EmbeddingService(String),
    #[error("synthesis service error: {0}")]
    SynthesisService(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal<E: std::fmt::Display>(err: E) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // Validation failures carry their message verbatim; external-service
        // failures return a generic body and log the detail for operators.
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::DimensionMismatch(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::EmbeddingService(detail) => {
                tracing::error!("Embedding service failure: {}", detail);
                (StatusCode::BAD_GATEWAY, "Embedding service failure".to_string())
            }
            ApiError::SynthesisService(detail) => {
                tracing::error!("Synthesis service failure: {}", detail);
                (StatusCode::BAD_GATEWAY, "Synthesis service failure".to_string())
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
