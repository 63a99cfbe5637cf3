//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **ProcessRunner**: 本番用。tokio::process で外部ツールを起動
//! - **ScriptedRunner**: 開発用・テスト用。応答を事前に積んでおく
//! - **MemoryLogSink**: テスト用。ログ行をメモリに溜める

pub mod process_runner;
pub mod scripted_runner;
pub mod memory_log_sink;

// 主要な型を再エクスポート
pub use self::process_runner::ProcessRunner;
pub use self::scripted_runner::{Invocation, ScriptedReply, ScriptedRunner};
pub use self::memory_log_sink::MemoryLogSink;
