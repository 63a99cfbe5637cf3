//! Clock port - 時刻の抽象化
//!
//! ログのタイムスタンプはこの trait から取る。
//! - **SystemClock**: ローカル時刻（本番用）
//! - **FixedClock**: 固定時刻（テスト用）

use chrono::{DateTime, FixedOffset, Local};

/// Clock は現在時刻を提供
///
/// オフセット付きで返すので、フォーマット側でタイムゾーンを意識しなくてよい。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// SystemClock はプロセスのローカルタイムゾーンでの現在時刻
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// FixedClock は常に同じ時刻を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}
