//! Cross-origin policy: one allowed browser origin, everything else refused.

use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::CorsLayer;

use crate::errors::AppError;
use crate::state::AppState;

/// CORS headers for the configured origin: GET/POST/OPTIONS, Content-Type,
/// credentials allowed.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("ALLOWED_ORIGIN '{allowed_origin}' is not a valid header value"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Rejects requests whose `Origin` names anything but the allowed origin,
/// preflights included. Requests without an `Origin` header pass.
pub async fn reject_foreign_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if origin.as_bytes() != state.config.allowed_origin.as_bytes() {
            let origin = String::from_utf8_lossy(origin.as_bytes()).into_owned();
            return AppError::OriginNotAllowed(origin).into_response();
        }
    }
    next.run(request).await
}
