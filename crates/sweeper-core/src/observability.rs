//! Observability - ロギングの初期化とフォーマット
//!
//! 出力は 1 イベント 1 行のテキスト:
//!
//! ```text
//! 2024-01-01 12:00:00 - INFO - Pruning images older than 24h
//! 2024-01-01 12:00:01 - WARNING - Invalid RUN_INTERVAL value 'x': ...
//! ```
//!
//! subscriber はプロセス起動時に一度だけ入れる。以後は `tracing` のマクロで書くだけ。

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::domain::SweeperError;
use crate::ports::{Clock, SystemClock};

/// タイムスタンプの書式（秒まで）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `RUST_LOG` が未設定・不正なときのフィルタ
pub const DEFAULT_FILTER: &str = "info";

/// LineFormat は `<timestamp> - <LEVEL> - <message>` 形式で 1 行書く
pub struct LineFormat<C> {
    clock: C,
}

impl<C: Clock> LineFormat<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

/// tracing のレベルを表示用ラベルに変換（`WARN` は `WARNING` と書く）
pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

impl<C, S, N> FormatEvent<S, N> for LineFormat<C>
where
    C: Clock,
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            self.clock.now().format(TIMESTAMP_FORMAT),
            level_label(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// LineFormat を使う subscriber を組み立てる（インストールはしない）
pub fn build_subscriber<C, W>(
    clock: C,
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    C: Clock + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .event_format(LineFormat::new(clock))
        .finish()
}

/// `RUST_LOG` からフィルタを作る。未設定・不正なら [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// プロセス全体の subscriber を stderr 向けにインストールする
///
/// 2 回目以降の呼び出しは `SweeperError::LoggingInit` を返す。
pub fn init_logging() -> Result<(), SweeperError> {
    let subscriber = build_subscriber(SystemClock, env_filter(), std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SweeperError::LoggingInit(e.to_string()))
}
