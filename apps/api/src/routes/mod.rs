pub mod health;
pub mod origin;

use anyhow::Result;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::counsel::handlers;
use crate::state::AppState;

/// Routes plus the cross-origin layers. The origin guard sits outside CORS
/// so a foreign origin never reaches a handler, preflight or not.
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = origin::cors_layer(&state.config.allowed_origin)?;

    Ok(Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/arguments", post(handlers::handle_arguments))
        .route("/api/recommend", post(handlers::handle_recommend))
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin::reject_foreign_origin,
        ))
        .with_state(state))
}
