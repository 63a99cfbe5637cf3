//! CleanupLoopBuilder - 設定からループを組み立てる
//!
//! # 学習ポイント
//! - Builder パターンで ports の実装を差し替えられるようにする
//! - 何も指定しなければ本番用の ProcessRunner を使う

use std::sync::Arc;

use tokio::sync::watch;

use crate::app::cleanup_loop::CleanupLoop;
use crate::domain::{PruneCommand, SweeperConfig};
use crate::impls::ProcessRunner;
use crate::ports::CommandRunner;

/// CleanupLoopBuilder は CleanupLoop を構築
///
/// # 使用例
/// ```ignore
/// let cleanup = CleanupLoopBuilder::new(config)
///     .runner(Arc::new(ScriptedRunner::new()))
///     .shutdown(rx)
///     .build();
/// ```
pub struct CleanupLoopBuilder {
    config: SweeperConfig,
    runner: Option<Arc<dyn CommandRunner>>,
    shutdown: Option<watch::Receiver<bool>>,
}

impl CleanupLoopBuilder {
    pub fn new(config: SweeperConfig) -> Self {
        Self {
            config,
            runner: None,
            shutdown: None,
        }
    }

    /// CommandRunner を差し替える
    pub fn runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// shutdown シグナルを受け取る receiver を設定
    pub fn shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn build(self) -> CleanupLoop {
        let runner = self
            .runner
            .unwrap_or_else(|| Arc::new(ProcessRunner::new()));
        let command = PruneCommand::new(self.config.container_tool, self.config.image_age);
        let cleanup = CleanupLoop::new(runner, command, self.config.run_interval);
        match self.shutdown {
            Some(rx) => cleanup.with_shutdown(rx),
            None => cleanup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RunInterval;
    use crate::impls::ScriptedRunner;

    #[test]
    fn build_uses_config_values() {
        let config = SweeperConfig {
            image_age: "12h".to_string(),
            run_interval: RunInterval::from_secs(60),
            container_tool: "podman".to_string(),
        };

        let cleanup = CleanupLoopBuilder::new(config).build();

        assert_eq!(cleanup.interval(), RunInterval::from_secs(60));
        assert_eq!(cleanup.command().program(), "podman");
        assert_eq!(
            cleanup.command().to_string(),
            "podman image prune -a --force --filter=until=12h"
        );
    }

    #[tokio::test]
    async fn build_with_custom_runner() {
        let runner = Arc::new(ScriptedRunner::new());
        let cleanup = CleanupLoopBuilder::new(SweeperConfig::default())
            .runner(runner.clone())
            .build();

        cleanup.run_once().await;

        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "docker");
        assert_eq!(calls[0].args.last().map(String::as_str), Some("--filter=until=24h"));
    }
}
