//! sweeper-core
//!
//! コンテナイメージを定期的に prune するデーモンの中核部分。
//!
//! # モジュール構成
//! - **domain**: 値オブジェクト（RunInterval, SweeperConfig, PruneCommand, PruneOutcome, errors）
//! - **ports**: 抽象化レイヤー（Clock, CommandRunner）
//! - **app**: アプリケーションロジック（prune, CleanupLoop, CleanupLoopBuilder）
//! - **impls**: ports の実装（ProcessRunner, ScriptedRunner, MemoryLogSink）
//! - **observability**: ロギングの初期化と行フォーマット

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;
pub mod observability;

pub use app::{CleanupLoop, CleanupLoopBuilder};
pub use domain::{PruneOutcome, RunInterval, SweeperConfig, SweeperError};
