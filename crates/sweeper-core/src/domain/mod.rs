//! Domain model (interval, config, command, outcome, errors).
//!
//! 副作用を持たない値だけを置く。外部プロセスや時刻は ports 経由で扱う。

pub mod errors;
pub mod interval;
pub mod config;
pub mod command;
pub mod outcome;

pub use self::errors::SweeperError;
pub use self::interval::{RunInterval, parse_interval};
pub use self::config::SweeperConfig;
pub use self::command::PruneCommand;
pub use self::outcome::PruneOutcome;
