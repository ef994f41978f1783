//! HTTP error types for the QR service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptpay_core::ValidationError;
use promptpay_emv::EncodeError;
use serde::Serialize;
use thiserror::Error;

/// HTTP errors for QR generation endpoints
#[derive(Debug, Error)]
pub enum QrHttpError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Encoding error: {0}")]
    EncodeError(#[from] EncodeError),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for QrHttpError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            QrHttpError::ParseError(msg) => {
                (StatusCode::BAD_REQUEST, "PARSE_ERROR", msg.clone(), None)
            }
            QrHttpError::ValidationError(e) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                e.to_string(),
                Some(format!("{:?}", e)),
            ),
            QrHttpError::EncodeError(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ENCODE_ERROR",
                e.to_string(),
                Some(format!("{:?}", e)),
            ),
            QrHttpError::ServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                msg.clone(),
                None,
            ),
            QrHttpError::RequestError(e) => (
                StatusCode::BAD_GATEWAY,
                "REQUEST_ERROR",
                e.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
