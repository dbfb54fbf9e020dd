use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LLM_COMMAND: &str = "python3";
const DEFAULT_LLM_ARGS: &str = "main.py";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Which collaborator answers prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum LlmBackend {
    /// Runs `program args... <prompt>` and reads its stdout.
    Subprocess { program: String, args: Vec<String> },
    /// Calls the Gemini `generateContent` REST endpoint directly.
    Gemini {
        api_key: String,
        model: String,
        base_url: String,
    },
}

/// Application configuration loaded from environment variables.
/// Built once at startup and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origin: String,
    pub llm: LlmBackend,
    /// Deadline applied to every collaborator invocation.
    pub llm_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .context("Required environment variable 'PORT' is not set")?
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let llm_timeout = match var("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };
        if llm_timeout == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        let backend = var("LLM_BACKEND").unwrap_or_else(|| "subprocess".to_string());
        let llm = match backend.trim().to_ascii_lowercase().as_str() {
            "subprocess" => LlmBackend::Subprocess {
                program: var("LLM_COMMAND").unwrap_or_else(|| DEFAULT_LLM_COMMAND.to_string()),
                args: var("LLM_ARGS")
                    .unwrap_or_else(|| DEFAULT_LLM_ARGS.to_string())
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            },
            "gemini" => LlmBackend::Gemini {
                api_key: var("GEMINI_API_KEY").context(
                    "Required environment variable 'GEMINI_API_KEY' is not set (LLM_BACKEND=gemini)",
                )?,
                model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: var("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            },
            other => bail!("LLM_BACKEND must be 'subprocess' or 'gemini', got '{other}'"),
        };

        Ok(Config {
            port,
            allowed_origin: var("ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            llm,
            llm_timeout: Duration::from_secs(llm_timeout),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
