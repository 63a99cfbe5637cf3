use sweeper_core::SweeperError;
use sweeper_core::observability::init_logging;

#[test]
fn second_init_returns_error_instead_of_panicking() {
    init_logging().unwrap();

    let err = init_logging().unwrap_err();

    assert!(matches!(err, SweeperError::LoggingInit(_)), "unexpected error: {err}");
    assert!(err.to_string().starts_with("failed to initialise logging"));
}
