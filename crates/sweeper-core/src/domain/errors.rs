//! Errors - エラー型
//!
//! sweeper のエラーは基本的に「ログに出して続行」で扱われます。
//! 致命的になるのはプロセス起動時のロギング初期化だけです。

use thiserror::Error;

/// SweeperError はドメインエラー
#[derive(Debug, Error)]
pub enum SweeperError {
    /// `digits[unit]` の形式に一致しない間隔文字列
    #[error("invalid interval format: '{0}'")]
    InvalidIntervalFormat(String),

    #[error("failed to initialise logging: {0}")]
    LoggingInit(String),
}
