//! CleanupLoop - 定期的なイメージ削除
//!
//! # 状態遷移
//! `Initializing → (Pruning → Sleeping)*`
//!
//! - Pruning の結果がどうであれ Sleeping に進む（ループは失敗で止まらない）
//! - Sleeping は `RunInterval` だけ待つ
//! - 終了条件は shutdown シグナルのみ。受け取るのは sleep 中かサイクルの合間で、
//!   実行中の prune は中断しない

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::app::prune::prune_images;
use crate::domain::{PruneCommand, PruneOutcome, RunInterval};
use crate::ports::CommandRunner;

/// CleanupLoop は prune と sleep を繰り返す
///
/// # 使用例
/// ```ignore
/// let cleanup = CleanupLoopBuilder::new(SweeperConfig::from_env())
///     .shutdown(shutdown_rx)
///     .build();
/// let cycles = cleanup.run().await;
/// ```
pub struct CleanupLoop {
    runner: Arc<dyn CommandRunner>,
    command: PruneCommand,
    interval: RunInterval,
    /// `true` が送られるか sender が drop されたら止まる
    shutdown: Option<watch::Receiver<bool>>,
}

impl CleanupLoop {
    pub fn new(runner: Arc<dyn CommandRunner>, command: PruneCommand, interval: RunInterval) -> Self {
        Self {
            runner,
            command,
            interval,
            shutdown: None,
        }
    }

    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn command(&self) -> &PruneCommand {
        &self.command
    }

    pub fn interval(&self) -> RunInterval {
        self.interval
    }

    /// Pruning を 1 回だけ行う
    pub async fn run_once(&self) -> PruneOutcome {
        prune_images(self.runner.as_ref(), &self.command).await
    }

    /// ループを実行し、止まったときに完了したサイクル数を返す
    ///
    /// shutdown receiver がなければ返らない。
    pub async fn run(mut self) -> u64 {
        info!(
            "Starting cleanup loop: {} every {} seconds",
            self.command,
            self.interval.as_secs()
        );

        let mut cycles: u64 = 0;
        loop {
            if self.shutdown_requested() {
                break;
            }

            self.run_once().await;
            cycles += 1;

            info!("Sleeping for {} seconds...", self.interval.as_secs());
            if !self.sleep().await {
                break;
            }
        }

        info!("Cleanup loop stopped after {cycles} cycle(s)");
        cycles
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// interval だけ待つ。shutdown で中断されたら false
    async fn sleep(&mut self) -> bool {
        let delay = tokio::time::sleep(self.interval.as_duration());
        tokio::pin!(delay);

        let Some(rx) = self.shutdown.as_mut() else {
            delay.await;
            return true;
        };

        loop {
            tokio::select! {
                _ = &mut delay => return true,
                changed = rx.changed() => {
                    // sender の drop も停止として扱う
                    if changed.is_err() || *rx.borrow() {
                        return false;
                    }
                }
            }
        }
    }
}
