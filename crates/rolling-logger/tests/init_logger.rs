use std::fs;

use rolling_logger::{init_logger_with, log_file, RollingConfig};

#[test]
fn test_init_logger_writes_plain_file() {
    let dir = tempfile::tempdir().unwrap();
    init_logger_with(dir.path(), "app", RollingConfig::default()).unwrap();

    let live = dir.path().join("app.log");
    assert_eq!(log_file(), Some(live.as_path()));

    log::info!("record from the log facade");
    rolling_logger::info("record from the helper").unwrap();
    rolling_logger::error("something failed").unwrap();

    let content = fs::read_to_string(&live).unwrap();
    assert!(content.contains("record from the log facade"), "{}", content);
    assert!(content.contains("record from the helper"), "{}", content);
    assert!(content.contains("ERROR"), "{}", content);
    assert!(!content.contains('\x1b'), "ANSI escapes in file: {:?}", content);

    // Global subscriber can only be installed once
    assert!(init_logger_with(dir.path(), "other", RollingConfig::default()).is_err());
}
