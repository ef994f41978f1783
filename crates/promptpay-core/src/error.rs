//! Error types for the service core

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while handling a generate request
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
