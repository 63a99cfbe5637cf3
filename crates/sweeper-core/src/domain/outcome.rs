//! Outcome - prune 1 回分の結果
//!
//! どの variant もループを止めない。ログの出し方は `app::prune` が決める。

/// PruneOutcome は prune 実行の観測結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// 終了コード 0
    Succeeded { stdout: String, stderr: String },

    /// 実行ファイルが PATH 上に見つからない
    ToolMissing { tool: String },

    /// 0 以外で終了（シグナルで終了した場合は `status: None`）
    Failed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// 見つかったが起動できなかった（権限など）
    SpawnFailed { tool: String, reason: String },
}

impl PruneOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}
