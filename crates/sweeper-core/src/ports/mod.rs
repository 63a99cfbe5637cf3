//! Ports - 抽象化レイヤー
//!
//! 外部プロセスと時刻をこのモジュールの trait の向こう側に置きます。
//! app 層は trait だけに依存し、実装は impls から注入します。

pub mod clock;
pub mod command_runner;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::command_runner::{CommandOutput, CommandRunner, RunError};
