//! Config - 環境変数からの設定読み込み
//!
//! | 変数 | デフォルト | 意味 |
//! |---|---|---|
//! | `IMAGE_AGE` | `24h` | prune の `until` フィルタにそのまま渡す |
//! | `RUN_INTERVAL` | `3600` | 実行間隔（[`parse_interval`] でパース） |
//! | `CONTAINER_TOOL` | `docker` | 呼び出すコンテナランタイム |
//! | `CLEANUP_INTERVAL` | - | `IMAGE_AGE` の旧名（`IMAGE_AGE` 未設定時のみ参照） |
//!
//! [`parse_interval`]: crate::domain::interval::parse_interval

use tracing::warn;

use crate::domain::interval::RunInterval;

pub const ENV_IMAGE_AGE: &str = "IMAGE_AGE";
pub const ENV_RUN_INTERVAL: &str = "RUN_INTERVAL";
pub const ENV_CONTAINER_TOOL: &str = "CONTAINER_TOOL";
pub const ENV_LEGACY_IMAGE_AGE: &str = "CLEANUP_INTERVAL";

pub const DEFAULT_IMAGE_AGE: &str = "24h";
pub const DEFAULT_RUN_INTERVAL: &str = "3600";
pub const DEFAULT_CONTAINER_TOOL: &str = "docker";

/// SweeperConfig はデーモンの実行設定
///
/// 起動時に一度だけ組み立てる。ループ中に環境変数を読み直すことはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweeperConfig {
    /// prune に渡す age フィルタ（検証しない）
    pub image_age: String,
    pub run_interval: RunInterval,
    pub container_tool: String,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            image_age: DEFAULT_IMAGE_AGE.to_string(),
            run_interval: RunInterval::DEFAULT,
            container_tool: DEFAULT_CONTAINER_TOOL.to_string(),
        }
    }
}

impl SweeperConfig {
    /// プロセスの環境変数から読み込む
    ///
    /// UTF-8 でない値は未設定として扱う。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の lookup 関数から読み込む
    ///
    /// `RUN_INTERVAL` が不正な場合は warning を出して [`RunInterval::DEFAULT`] を使う。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let image_age = lookup(ENV_IMAGE_AGE)
            .or_else(|| lookup(ENV_LEGACY_IMAGE_AGE))
            .unwrap_or_else(|| DEFAULT_IMAGE_AGE.to_string());

        let raw_interval =
            lookup(ENV_RUN_INTERVAL).unwrap_or_else(|| DEFAULT_RUN_INTERVAL.to_string());
        let run_interval = match raw_interval.parse::<RunInterval>() {
            Ok(interval) => interval,
            Err(e) => {
                warn!(
                    "Invalid {ENV_RUN_INTERVAL} value '{raw_interval}': {e}. Using default of {} seconds.",
                    RunInterval::DEFAULT.as_secs()
                );
                RunInterval::DEFAULT
            }
        };

        let container_tool =
            lookup(ENV_CONTAINER_TOOL).unwrap_or_else(|| DEFAULT_CONTAINER_TOOL.to_string());

        Self {
            image_age,
            run_interval,
            container_tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::MemoryLogSink;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SweeperConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, SweeperConfig::default());
        assert_eq!(config.image_age, "24h");
        assert_eq!(config.run_interval.as_secs(), 3_600);
        assert_eq!(config.container_tool, "docker");
    }

    #[test]
    fn reads_all_values() {
        let config = SweeperConfig::from_lookup(lookup_from(&[
            ("IMAGE_AGE", "12h"),
            ("RUN_INTERVAL", "1m"),
            ("CONTAINER_TOOL", "podman"),
        ]));
        assert_eq!(config.image_age, "12h");
        assert_eq!(config.run_interval, RunInterval::from_secs(60));
        assert_eq!(config.container_tool, "podman");
    }

    #[test]
    fn image_age_is_forwarded_without_validation() {
        let config = SweeperConfig::from_lookup(lookup_from(&[("IMAGE_AGE", "not a duration")]));
        assert_eq!(config.image_age, "not a duration");
    }

    #[test]
    fn legacy_variable_is_used_only_when_image_age_is_unset() {
        let legacy_only = SweeperConfig::from_lookup(lookup_from(&[("CLEANUP_INTERVAL", "48h")]));
        assert_eq!(legacy_only.image_age, "48h");

        let both = SweeperConfig::from_lookup(lookup_from(&[
            ("CLEANUP_INTERVAL", "48h"),
            ("IMAGE_AGE", "6h"),
        ]));
        assert_eq!(both.image_age, "6h");
    }

    #[test]
    fn garbage_interval_falls_back_to_default_with_warning() {
        let sink = MemoryLogSink::new();
        let _guard = tracing::subscriber::set_default(sink.subscriber());

        let config = SweeperConfig::from_lookup(lookup_from(&[("RUN_INTERVAL", "garbage")]));

        assert_eq!(config.run_interval.as_secs(), 3_600);
        let logs = sink.contents();
        assert!(logs.contains("WARNING"), "logs: {logs}");
        assert!(logs.contains("'garbage'"), "logs: {logs}");
        assert!(logs.contains("invalid interval format"), "logs: {logs}");
    }

    #[test]
    fn empty_interval_is_treated_as_malformed() {
        let config = SweeperConfig::from_lookup(lookup_from(&[("RUN_INTERVAL", "")]));
        assert_eq!(config.run_interval, RunInterval::DEFAULT);
    }
}
