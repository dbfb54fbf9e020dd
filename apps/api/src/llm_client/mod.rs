/// LLM Client — the single seam between handlers and the language model.
///
/// ARCHITECTURAL RULE: handlers never spawn processes or call model APIs
/// directly. Everything goes through `LlmInvoker::invoke`, so the backend can
/// be swapped (subprocess ⇄ REST) without touching handler code.
use std::process::ExitStatus;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, LlmBackend};

pub mod gemini;
pub mod prompts;
pub mod subprocess;

pub use gemini::GeminiInvoker;
pub use subprocess::SubprocessInvoker;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited unsuccessfully ({status})")]
    Exit { program: String, status: ExitStatus },

    #[error("no response within {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Given a prompt, returns the model's raw text.
///
/// `deadline` bounds the whole call; implementations must give up (and clean
/// up after themselves) once it elapses.
#[async_trait]
pub trait LlmInvoker: Send + Sync {
    async fn invoke(&self, prompt: &str, deadline: Duration) -> Result<String, LlmError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Builds the invoker selected by configuration.
pub fn build_invoker(config: &Config) -> Arc<dyn LlmInvoker> {
    let invoker: Arc<dyn LlmInvoker> = match &config.llm {
        LlmBackend::Subprocess { program, args } => {
            info!("LLM backend: subprocess ({program} {})", args.join(" "));
            Arc::new(SubprocessInvoker::new(program.clone(), args.clone()))
        }
        LlmBackend::Gemini {
            api_key,
            model,
            base_url,
        } => {
            info!("LLM backend: gemini (model: {model})");
            Arc::new(GeminiInvoker::new(
                api_key.clone(),
                model.clone(),
                base_url.clone(),
            ))
        }
    };
    invoker
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(llm: LlmBackend) -> Config {
        Config {
            port: 0,
            allowed_origin: "http://localhost:3000".to_string(),
            llm,
            llm_timeout: Duration::from_secs(5),
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_build_invoker_picks_subprocess() {
        let invoker = build_invoker(&config_with(LlmBackend::Subprocess {
            program: "python3".to_string(),
            args: vec!["main.py".to_string()],
        }));
        assert_eq!(invoker.backend(), "subprocess");
    }

    #[test]
    fn test_build_invoker_picks_gemini() {
        let invoker = build_invoker(&config_with(LlmBackend::Gemini {
            api_key: "key".to_string(),
            model: "gemini-2.0-flash-001".to_string(),
            base_url: "http://127.0.0.1:1".to_string(),
        }));
        assert_eq!(invoker.backend(), "gemini");
    }

    #[test]
    fn test_timeout_message_names_seconds() {
        let err = LlmError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "no response within 1.5s");
    }
}
