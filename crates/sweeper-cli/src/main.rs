use anyhow::Context;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use sweeper_core::observability::init_logging;
use sweeper_core::{CleanupLoopBuilder, SweeperConfig};

/// SIGINT（Unix では SIGTERM も）を待つ
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), std::io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        result = terminate => result,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // (A) ロギングは最初に一度だけ
    init_logging().context("failed to set up logging")?;

    // (B) 設定は起動時に一度だけ読む（不正な RUN_INTERVAL は warning + デフォルト）
    let config = SweeperConfig::from_env();

    // (C) シグナルで sleep を打ち切れるようにする
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => {
                info!("Shutdown signal received, stopping after the current cycle");
                if shutdown_tx.send(true).is_err() {
                    debug!("Cleanup loop already stopped, nothing to signal");
                }
            }
            Err(e) => {
                warn!("Could not listen for shutdown signals: {e}");
                // sender を drop するとループが止まるので、ループが終わるまで保持する
                shutdown_tx.closed().await;
            }
        }
    });

    // (D) ループ本体。シグナルがなければ返らない
    let cycles = CleanupLoopBuilder::new(config)
        .shutdown(shutdown_rx)
        .build()
        .run()
        .await;

    info!("Exiting after {cycles} cleanup cycle(s)");
    Ok(())
}
