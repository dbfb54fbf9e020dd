//! Uniform JSON envelope for success and error responses.

use std::fmt::Display;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// Writes `{"error": "<message>: <cause>"}` with the given status.
pub fn respond_with_error(status: StatusCode, message: &str, cause: impl Display) -> Response {
    let body = json!({ "error": format!("{message}: {cause}") });
    json_response(status, body.to_string().into_bytes())
}

/// Serializes `payload` and writes it with the given status.
/// A payload that fails to serialize becomes its own 500 and is logged.
pub fn respond_with_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => json_response(status, bytes),
        Err(e) => {
            tracing::error!("Failed to serialize response payload: {e}");
            respond_with_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "error marshalling response",
                e,
            )
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
