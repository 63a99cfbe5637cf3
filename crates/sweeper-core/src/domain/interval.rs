//! Interval - 実行間隔のパース
//!
//! `RUN_INTERVAL` は `digits[unit]` 形式の文字列です。
//! - unit: `s`(秒) / `m`(分) / `h`(時) / `d`(日)、省略時は秒
//! - 前後の空白と大文字小文字は無視
//!
//! ```ignore
//! assert_eq!(parse_interval("2h")?, 7200);
//! assert_eq!(parse_interval(" 30M ")?, 1800);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::errors::SweeperError;

/// 間隔文字列を秒数に変換する
///
/// 形式に一致しない入力（空文字、未知の unit、符号、小数点、複数 unit）と
/// u64 に収まらない値は `InvalidIntervalFormat` になる。
pub fn parse_interval(input: &str) -> Result<u64, SweeperError> {
    let invalid = || SweeperError::InvalidIntervalFormat(input.to_string());

    let normalized = input.trim().to_ascii_lowercase();
    let (digits, unit) = match normalized.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&normalized[..idx], Some(c)),
        Some(_) => (normalized.as_str(), None),
        None => return Err(invalid()),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let multiplier = match unit {
        None | Some('s') => 1,
        Some('m') => 60,
        Some('h') => 3_600,
        Some('d') => 86_400,
        Some(_) => return Err(invalid()),
    };

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    value.checked_mul(multiplier).ok_or_else(invalid)
}

/// RunInterval はクリーンアップ実行の間隔（秒単位）
///
/// 起動時に一度だけ計算され、以降のすべての sleep で使い回される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunInterval {
    seconds: u64,
}

impl RunInterval {
    /// パース失敗時に使う間隔（1 時間）
    pub const DEFAULT: Self = Self::from_secs(3_600);

    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn as_secs(&self) -> u64 {
        self.seconds
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }
}

impl Default for RunInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for RunInterval {
    type Err = SweeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s).map(Self::from_secs)
    }
}

impl fmt::Display for RunInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}
