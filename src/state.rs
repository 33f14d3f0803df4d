use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Only schema version accepted on load.
pub const STATE_VERSION: u32 = 1;

pub const DEFAULT_GROUP_ID: &str = "default";
pub const DEFAULT_GROUP_NAME: &str = "Default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    /// Launch target: executable, folder or document.
    pub path: String,
    /// `None` means no arguments configured, which is not the same as `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// Creation time in epoch millis, kept as the exact JSON number that was stored.
    pub added_at: Number,
}

impl AppEntry {
    /// Creation time as integer millis, if the stored number is integral.
    pub fn added_at_ms(&self) -> Option<i64> {
        self.added_at.as_i64()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub apps: Vec<AppEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherState {
    pub version: u32,
    pub active_group_id: String,
    pub groups: Vec<Group>,
}

impl Default for LauncherState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            active_group_id: DEFAULT_GROUP_ID.into(),
            groups: vec![Group {
                id: DEFAULT_GROUP_ID.into(),
                name: DEFAULT_GROUP_NAME.into(),
                apps: Vec::new(),
            }],
        }
    }
}

impl LauncherState {
    /// First group with the given id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn active_group(&self) -> Option<&Group> {
        self.group(&self.active_group_id)
    }

    /// First app with the given id across all groups, in display order.
    pub fn find_app(&self, app_id: &str) -> Option<(&Group, &AppEntry)> {
        self.groups.iter().find_map(|group| {
            group
                .apps
                .iter()
                .find(|app| app.id == app_id)
                .map(|app| (group, app))
        })
    }

    /// Points `active_group_id` at the first group when it references nothing.
    ///
    /// Returns `true` when the id was changed. With no groups there is nothing
    /// to repair to and the id is left alone.
    pub fn repair_active_group(&mut self) -> bool {
        if self.group(&self.active_group_id).is_some() {
            return false;
        }
        match self.groups.first() {
            Some(first) => {
                self.active_group_id = first.id.clone();
                true
            }
            None => false,
        }
    }
}
