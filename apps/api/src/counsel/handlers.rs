//! Axum route handlers for the counselling API.
//!
//! Bodies are taken as raw bytes and decoded here so that a malformed body
//! produces the same 500 envelope as every other failure, rather than axum's
//! own 4xx rejection.

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use tracing::debug;

use crate::counsel::models::{ArgumentRequest, ProfileRequest};
use crate::counsel::output::parse_recommendations;
use crate::counsel::prompts::{argument_prompt, recommendation_prompt};
use crate::errors::AppError;
use crate::response::respond_with_json;
use crate::state::AppState;

/// POST /api/arguments
///
/// Returns the model's bullet-point justification as one JSON string,
/// exactly as produced.
pub async fn handle_arguments(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request: ArgumentRequest = serde_json::from_slice(&body).map_err(AppError::Decode)?;

    let prompt = argument_prompt(&request);
    let text = state.llm.invoke(&prompt, state.config.llm_timeout).await?;

    Ok(respond_with_json(StatusCode::OK, &text))
}

/// POST /api/recommend
///
/// Asks the model for a JSON array of recommendations, strips code fences,
/// validates the result and re-encodes only the known fields.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let profile: ProfileRequest = serde_json::from_slice(&body).map_err(AppError::Decode)?;

    let prompt = recommendation_prompt(&profile);
    let raw = state.llm.invoke(&prompt, state.config.llm_timeout).await?;
    debug!("Recommendation output: {raw}");

    let recommendations = parse_recommendations(&raw).map_err(AppError::Parse)?;

    Ok(respond_with_json(StatusCode::OK, &recommendations))
}
