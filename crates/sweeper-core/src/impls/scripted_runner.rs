//! ScriptedRunner - 開発用・テスト用の CommandRunner
//!
//! # 学習ポイント
//! - 事前に積んだ応答を順番に返す
//! - 呼び出し履歴（引数と時刻）を記録して、ループの挙動を外から検証する

use std::collections::VecDeque;
use std::io;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::time::Instant;

use crate::ports::{CommandOutput, CommandRunner, RunError};

/// ScriptedRunner が返す 1 回分の応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// 指定の終了コードで終了
    Exit {
        status: i32,
        stdout: String,
        stderr: String,
    },
    /// シグナルで終了（終了コードなし）
    Signalled,
    /// 実行ファイルが見つからない
    NotFound,
    /// その他の起動エラー
    SpawnError(io::ErrorKind),
}

impl ScriptedReply {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self::Exit {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn exit(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::Exit {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    fn into_result(self, program: &str) -> Result<CommandOutput, RunError> {
        match self {
            Self::Exit {
                status,
                stdout,
                stderr,
            } => Ok(CommandOutput {
                status: Some(status),
                stdout: stdout.into_bytes(),
                stderr: stderr.into_bytes(),
            }),
            Self::Signalled => Ok(CommandOutput::default()),
            Self::NotFound => Err(RunError::NotFound(program.to_string())),
            Self::SpawnError(kind) => Err(RunError::Io {
                program: program.to_string(),
                source: io::Error::from(kind),
            }),
        }
    }
}

/// 記録された呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// tokio の時計での呼び出し時刻（paused time でも使える）
    pub at: Instant,
}

/// ScriptedRunner は積まれた応答を FIFO で返す
///
/// 応答を使い切ったあとは `fallback` を返し続ける。
///
/// # 使用例
/// ```ignore
/// let runner = ScriptedRunner::new()
///     .then(ScriptedReply::NotFound)
///     .then(ScriptedReply::exit(1, "", "permission denied"));
/// ```
pub struct ScriptedRunner {
    replies: Mutex<VecDeque<ScriptedReply>>,
    fallback: ScriptedReply,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    /// 常に成功（出力なし）を返す ScriptedRunner を作成
    pub fn new() -> Self {
        Self::with_fallback(ScriptedReply::success(""))
    }

    pub fn with_fallback(fallback: ScriptedReply) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// 応答を末尾に積む
    pub fn then(self, reply: ScriptedReply) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RunError> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Invocation {
                program: program.to_string(),
                args: args.to_vec(),
                at: Instant::now(),
            });

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        reply.into_result(program)
    }
}
