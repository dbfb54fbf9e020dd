use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::response::respond_with_error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every request-path failure maps to 500; only the message tells them apart.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("error decoding body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error engaging LLM: {0}")]
    Llm(#[from] LlmError),

    #[error("error parsing LLM output: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("origin not allowed: {0}")]
    OriginNotAllowed(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::OriginNotAllowed(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Decode(e) => {
                tracing::warn!("Request body rejected: {e}");
                respond_with_error(status, "error decoding body", e)
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                respond_with_error(status, "error engaging LLM", e)
            }
            AppError::Parse(e) => {
                tracing::error!("Error unmarshalling LLM output: {e}");
                respond_with_error(status, "error parsing LLM output", e)
            }
            AppError::OriginNotAllowed(origin) => {
                tracing::warn!("Rejected cross-origin request from {origin}");
                respond_with_error(status, "origin not allowed", origin)
            }
        }
    }
}
