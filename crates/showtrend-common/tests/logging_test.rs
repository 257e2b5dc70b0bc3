//! File-output logging test.
//!
//! Lives in its own integration test binary because the tracing subscriber
//! can only be installed once per process.

use showtrend_common::{init_logging, LoggingConfig};

#[test]
fn test_file_logging_writes_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showtrend.log");

    init_logging(LoggingConfig {
        level: "debug".to_string(),
        pretty_format: false,
        file_path: Some(path.to_string_lossy().into_owned()),
        ..LoggingConfig::default()
    })
    .unwrap();

    tracing::info!(season = 2, "season trend fitted");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("season trend fitted"));
    assert!(!contents.contains("\u{1b}["), "file output must not carry ANSI escapes");
}
