//! MemoryLogSink - ログ出力をメモリに溜める MakeWriter
//!
//! テストで「何が、どのレベルで出たか」を文字列として検証するために使う。

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{FixedOffset, TimeZone};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::observability::build_subscriber;
use crate::ports::FixedClock;

/// MemoryLogSink は書き込まれたバイト列を共有バッファに保持する
///
/// clone はバッファを共有する。
#[derive(Debug, Clone, Default)]
pub struct MemoryLogSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// このシンクに書き込む subscriber を作る
    ///
    /// 時刻は 2024-01-01 00:00:00 (UTC) に固定、レベルは debug 以上。
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        let at = FixedOffset::east_opt(0)
            .and_then(|utc| utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single())
            .unwrap_or_default();
        build_subscriber(FixedClock::new(at), EnvFilter::new("debug"), self.clone())
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for MemoryLogSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryLogSink {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_formatted_lines() {
        let sink = MemoryLogSink::new();
        tracing::subscriber::with_default(sink.subscriber(), || {
            tracing::info!("hello");
            tracing::warn!("careful");
        });

        assert_eq!(
            sink.lines(),
            vec![
                "2024-01-01 00:00:00 - INFO - hello".to_string(),
                "2024-01-01 00:00:00 - WARNING - careful".to_string(),
            ]
        );
    }
}
