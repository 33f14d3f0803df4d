use group_launcher::toast::{append_toast_log, NoopToastSink, ToastLog, ToastSink};
use tempfile::tempdir;

#[test]
fn toast_log_appends_timestamped_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("toast.log");
    let sink = ToastLog::new(Some(path.clone()));

    sink.show_toast("Failed to close window: busy");
    sink.show_toast("second");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - Failed to close window: busy"));
    assert!(lines[1].ends_with(" - second"));
}

#[test]
fn toast_log_without_file_writes_nothing() {
    let sink = ToastLog::new(None);
    assert!(sink.file().is_none());
    sink.show_toast("only logged");
    NoopToastSink.show_toast("dropped");
}

#[test]
fn unwritable_log_does_not_panic() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened for appending.
    append_toast_log(dir.path(), "ignored");
}
