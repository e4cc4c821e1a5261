use rolling_logger::{error, info, log_file, LoggerError};

#[test]
fn test_helpers_require_init() {
    assert!(log_file().is_none());
    assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
    assert!(matches!(error("x"), Err(LoggerError::NotInitialized)));
}
