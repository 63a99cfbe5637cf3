//! App - アプリケーション層
//!
//! ports を組み合わせてデーモンの振る舞いを実装します。
//!
//! # 主要コンポーネント
//! - **prune**: 外部ツールの呼び出しと結果のロギング
//! - **CleanupLoop**: prune → sleep の無限ループ
//! - **CleanupLoopBuilder**: 設定からのワイヤリング

pub mod prune;
pub mod cleanup_loop;
pub mod builder;

// 主要な型を再エクスポート
pub use self::prune::{log_outcome, prune_images};
pub use self::cleanup_loop::CleanupLoop;
pub use self::builder::CleanupLoopBuilder;
