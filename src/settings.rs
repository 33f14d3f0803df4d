use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::toast::TOAST_LOG_FILE;

pub const SETTINGS_FILE: &str = "settings.json";
const APP_DIR_NAME: &str = "group_launcher";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the stored launcher state. If `None`, the platform
    /// data directory is used.
    pub data_dir: Option<String>,
    /// When enabled the logger is initialised at debug level.
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    pub log_file: Option<String>,
    /// Keep a timestamped history of toast notifications on disk.
    pub enable_toast_log: bool,
    pub toast_log_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            debug_logging: false,
            log_file: None,
            enable_toast_log: true,
            toast_log_file: TOAST_LOG_FILE.into(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs_next::data_dir()
                .map(|d| d.join(APP_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from("data")),
        }
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(PathBuf::from)
    }

    pub fn toast_log_file(&self) -> Option<PathBuf> {
        self.enable_toast_log
            .then(|| PathBuf::from(&self.toast_log_file))
    }
}
