//! Process-wide handle
//!
//! The global context lives for the whole test binary, so every check runs
//! in one test to keep the order fixed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use logwrapper_core::{Config, EngineLevel, LogWrapperError};
use tempfile::TempDir;

#[test]
fn test_global_lifecycle() {
    assert!(logwrapper_core::wrapper().is_none());

    let config = Config {
        level: "warn".to_string(),
        console: true,
        ..Config::default()
    };
    let log = logwrapper_core::init(&config).unwrap();
    assert_eq!(log.context().sink_count(), 1);

    // Re-init replaces sinks instead of stacking them.
    logwrapper_core::init(&config).unwrap();
    let global = logwrapper_core::wrapper().unwrap();
    assert_eq!(global.context().sink_count(), 1);
    assert_eq!(global.context().level(), EngineLevel::Warn);

    // Handles share the one context.
    global.context().set_level(EngineLevel::Error);
    assert_eq!(log.context().level(), EngineLevel::Error);

    // A failing init leaves the previous configuration in place.
    let dir = TempDir::new().unwrap();
    let bad = Config {
        file: true,
        file_name: "missing.log".to_string(),
        file_path: dir.path().join("no/such/dir").to_string_lossy().into_owned(),
        ..Config::default()
    };
    let err = logwrapper_core::init(&bad).unwrap_err();
    assert!(matches!(err, LogWrapperError::FileOpen { .. }));
    assert_eq!(
        logwrapper_core::global::context().unwrap().level(),
        EngineLevel::Error
    );
    assert_eq!(log.context().sink_count(), 1);
}
