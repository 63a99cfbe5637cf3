//! CommandRunner port - 外部コマンド実行の抽象化
//!
//! prune は docker / podman などの外部ツールに委譲する。
//! ループのテストで本物のツールを呼ばないように trait で切り離している。
//!
//! # 実装
//! - **ProcessRunner**: tokio::process（本番用）
//! - **ScriptedRunner**: 事前に決めた結果を返す（テスト用）

use async_trait::async_trait;
use thiserror::Error;

/// 終了したプロセスの観測結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 終了コード（シグナルで終了した場合は None）
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// RunError はプロセスを起動できなかったときのエラー
///
/// 0 以外の終了コードはエラーではなく `CommandOutput` で返す。
#[derive(Debug, Error)]
pub enum RunError {
    #[error("executable not found: {0}")]
    NotFound(String),

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// CommandRunner は外部プログラムを実行して終了まで待つ
///
/// # Thread Safety
/// - `Send + Sync` を要求（`Arc<dyn CommandRunner>` で共有する）
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// `program` を `args` 付きで実行し、stdout / stderr を回収する
    ///
    /// タイムアウトはない。ツールが固まればここも返らない。
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RunError>;
}
