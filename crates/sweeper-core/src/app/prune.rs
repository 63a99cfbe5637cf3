//! Prune - 外部ツールによるイメージ削除と結果のロギング
//!
//! # フロー
//! 1. `CommandRunner` で `<tool> image prune -a --force --filter=until=<age>` を実行
//! 2. 結果を `PruneOutcome` に分類
//! 3. 分類に応じたレベルでログを出す
//!
//! どの結果でもエラーは返さない。呼び出し側（ループ）は常に次の sleep へ進む。

use tracing::{error, info, warn};

use crate::domain::{PruneCommand, PruneOutcome};
use crate::ports::{CommandRunner, RunError};

/// prune を 1 回実行して結果を返す
pub async fn prune_images<R>(runner: &R, command: &PruneCommand) -> PruneOutcome
where
    R: CommandRunner + ?Sized,
{
    info!("Pruning images older than {}...", command.image_age());

    let outcome = match runner.run(command.program(), command.args()).await {
        Ok(output) if output.success() => PruneOutcome::Succeeded {
            stdout: output.stdout_lossy(),
            stderr: output.stderr_lossy(),
        },
        Ok(output) => PruneOutcome::Failed {
            status: output.status,
            stdout: output.stdout_lossy(),
            stderr: output.stderr_lossy(),
        },
        Err(RunError::NotFound(tool)) => PruneOutcome::ToolMissing { tool },
        Err(err @ RunError::Io { .. }) => PruneOutcome::SpawnFailed {
            tool: command.program().to_string(),
            reason: err.to_string(),
        },
    };

    log_outcome(&outcome);
    outcome
}

/// ツール出力の空でない行を順に返す（1 イベント 1 行にするため）
fn output_lines(stream: &str) -> impl Iterator<Item = &str> {
    stream.lines().map(str::trim_end).filter(|line| !line.trim().is_empty())
}

/// 結果をログに出す
///
/// - 成功: stdout は INFO、stderr は WARNING（空行は出さない）
/// - それ以外: ERROR
///
/// ツールの出力は複数行なので、行ごとに別イベントにする。
pub fn log_outcome(outcome: &PruneOutcome) {
    match outcome {
        PruneOutcome::Succeeded { stdout, stderr } => {
            for line in output_lines(stdout) {
                info!("{line}");
            }
            for line in output_lines(stderr) {
                warn!("{line}");
            }
        }
        PruneOutcome::ToolMissing { tool } => {
            error!("{tool} not found: container runtime not installed or not reachable");
        }
        PruneOutcome::Failed {
            status,
            stdout,
            stderr,
        } => {
            let status = match status {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            };
            error!("Image prune failed ({status}).");
            for line in output_lines(stdout) {
                error!("stdout: {line}");
            }
            for line in output_lines(stderr) {
                error!("stderr: {line}");
            }
        }
        PruneOutcome::SpawnFailed { tool, reason } => {
            error!("Could not launch {tool}: {reason}");
        }
    }
}
