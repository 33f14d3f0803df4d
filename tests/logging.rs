use serial_test::serial;
use std::path::PathBuf;
use tempfile::tempdir;

// The subscriber is process-global, so this binary holds a single test.
#[test]
#[serial]
fn release_logging_ignores_rust_log_and_writes_beside_cwd() {
    let dir = tempdir().unwrap();
    let cwd = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    std::env::set_var("RUST_LOG", "trace");

    // A bare file name has no parent directory.
    group_launcher::logging::init(false, Some(PathBuf::from("launcher.log")));
    tracing::debug!("verbose detail");
    tracing::info!("state loaded");

    std::env::set_current_dir(cwd).unwrap();
    std::env::remove_var("RUST_LOG");

    let contents = std::fs::read_to_string(dir.path().join("launcher.log")).unwrap();
    assert!(contents.contains("state loaded"));
    assert!(!contents.contains("verbose detail"));
}
