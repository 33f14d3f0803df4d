use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TOAST_LOG_FILE: &str = "toast.log";

/// Fire-and-forget user notification.
pub trait ToastSink {
    fn show_toast(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopToastSink;

impl ToastSink for NoopToastSink {
    fn show_toast(&self, _message: &str) {}
}

/// Logs toasts and optionally keeps a timestamped history on disk.
#[derive(Debug, Clone, Default)]
pub struct ToastLog {
    file: Option<PathBuf>,
}

impl ToastLog {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl ToastSink for ToastLog {
    fn show_toast(&self, message: &str) {
        tracing::warn!(toast = %message);
        if let Some(path) = &self.file {
            append_toast_log(path, message);
        }
    }
}

pub fn append_toast_log(path: &Path, msg: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
    }
}
