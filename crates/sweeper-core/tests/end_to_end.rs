use std::sync::Arc;
use std::time::Duration;

use sweeper_core::impls::{MemoryLogSink, ScriptedReply, ScriptedRunner};
use sweeper_core::{CleanupLoopBuilder, SweeperConfig};
use tokio::sync::watch;

fn config_from(pairs: &[(&str, &str)]) -> SweeperConfig {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SweeperConfig::from_lookup(move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

#[tokio::test(start_paused = true)]
async fn prunes_with_configured_age_every_minute() {
    let config = config_from(&[("IMAGE_AGE", "12h"), ("RUN_INTERVAL", "1m")]);
    let runner = Arc::new(ScriptedRunner::new());
    let (tx, rx) = watch::channel(false);

    let cleanup = CleanupLoopBuilder::new(config)
        .runner(runner.clone())
        .shutdown(rx)
        .build();
    let handle = tokio::spawn(cleanup.run());

    tokio::time::sleep(Duration::from_secs(330)).await;
    tx.send(true).unwrap();
    let cycles = handle.await.unwrap();

    assert_eq!(cycles, 6);
    let calls = runner.invocations();
    assert_eq!(calls.len(), 6);
    for call in &calls {
        assert_eq!(call.program, "docker");
        assert_eq!(
            call.args,
            vec!["image", "prune", "-a", "--force", "--filter=until=12h"]
        );
    }
    for pair in calls.windows(2) {
        assert_eq!(pair[1].at - pair[0].at, Duration::from_secs(60));
    }
}

#[tokio::test(start_paused = true)]
async fn malformed_interval_falls_back_to_an_hour_and_keeps_going() {
    let sink = MemoryLogSink::new();
    let _guard = tracing::subscriber::set_default(sink.subscriber());

    let config = config_from(&[("RUN_INTERVAL", "garbage")]);
    let runner = Arc::new(
        ScriptedRunner::new()
            .then(ScriptedReply::NotFound)
            .then(ScriptedReply::exit(1, "", "permission denied")),
    );
    let (tx, rx) = watch::channel(false);
    let cleanup = CleanupLoopBuilder::new(config)
        .runner(runner.clone())
        .shutdown(rx)
        .build();
    let handle = tokio::spawn(cleanup.run());

    tokio::time::sleep(Duration::from_secs(2 * 3_600 + 30)).await;
    tx.send(true).unwrap();

    assert_eq!(handle.await.unwrap(), 3);
    let logs = sink.contents();
    assert!(logs.contains("WARNING - Invalid RUN_INTERVAL value 'garbage'"), "logs: {logs}");
    assert!(logs.contains("Using default of 3600 seconds."), "logs: {logs}");
    assert!(logs.contains("container runtime not installed or not reachable"), "logs: {logs}");
    assert!(logs.contains("stderr: permission denied"), "logs: {logs}");
    assert!(logs.contains("Sleeping for 3600 seconds..."), "logs: {logs}");
}
