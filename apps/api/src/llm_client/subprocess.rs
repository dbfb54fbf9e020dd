//! Subprocess backend: `program args... <prompt>`, full stdout is the answer.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{LlmError, LlmInvoker};

#[derive(Debug, Clone)]
pub struct SubprocessInvoker {
    program: String,
    args: Vec<String>,
}

impl SubprocessInvoker {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

#[async_trait]
impl LlmInvoker for SubprocessInvoker {
    async fn invoke(&self, prompt: &str, deadline: Duration) -> Result<String, LlmError> {
        debug!(
            "Invoking {} ({} prompt bytes, deadline {:?})",
            self.program,
            prompt.len(),
            deadline
        );

        // The child is killed when the output future is dropped on timeout.
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(deadline, child)
            .await
            .map_err(|_| {
                warn!("{} exceeded its {:?} deadline; killed", self.program, deadline);
                LlmError::Timeout(deadline)
            })?
            .map_err(|source| LlmError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
            return Err(LlmError::Exit {
                program: self.program.clone(),
                status: output.status,
            });
        }

        debug!("{} returned {} bytes", self.program, output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn backend(&self) -> &'static str {
        "subprocess"
    }
}
