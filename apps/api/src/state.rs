use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmInvoker;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable model backend. Subprocess by default, Gemini via LLM_BACKEND.
    pub llm: Arc<dyn LlmInvoker>,
}
