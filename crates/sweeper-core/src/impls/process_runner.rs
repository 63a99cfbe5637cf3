//! ProcessRunner - tokio::process による CommandRunner 実装

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::ports::{CommandOutput, CommandRunner, RunError};

/// ProcessRunner は子プロセスを起動して終了まで待つ
///
/// stdin は閉じておく（prune に対話させない）。stdout / stderr はすべて回収する。
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RunError> {
        debug!(program, ?args, "spawning external command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => RunError::NotFound(program.to_string()),
                _ => RunError::Io {
                    program: program.to_string(),
                    source,
                },
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
