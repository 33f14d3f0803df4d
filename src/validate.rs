//! Structural check for persisted launcher state.
//!
//! The checks run against raw JSON before any typed conversion so that a
//! single malformed field anywhere rejects the whole document.

use serde_json::{Map, Value};

use crate::state::STATE_VERSION;

/// Returns `true` when `value` has the exact shape of a version 1 launcher state.
pub fn is_valid_state(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    if !is_current_version(obj.get("version")) {
        return false;
    }
    if !is_string(obj, "activeGroupId") {
        return false;
    }
    match obj.get("groups") {
        Some(Value::Array(groups)) => groups.iter().all(is_valid_group),
        _ => false,
    }
}

/// Numeric equality with the current version, so `1` and `1.0` both match.
fn is_current_version(version: Option<&Value>) -> bool {
    version.and_then(Value::as_f64) == Some(f64::from(STATE_VERSION))
}

fn is_valid_group(value: &Value) -> bool {
    let Some(group) = value.as_object() else {
        return false;
    };
    if !is_string(group, "id") || !is_string(group, "name") {
        return false;
    }
    match group.get("apps") {
        Some(Value::Array(apps)) => apps.iter().all(is_valid_app),
        _ => false,
    }
}

fn is_valid_app(value: &Value) -> bool {
    let Some(app) = value.as_object() else {
        return false;
    };
    is_string(app, "id")
        && is_string(app, "name")
        && is_string(app, "path")
        && matches!(app.get("args"), None | Some(Value::String(_)))
        && matches!(app.get("addedAt"), Some(Value::Number(_)))
}

fn is_string(obj: &Map<String, Value>, key: &str) -> bool {
    matches!(obj.get(key), Some(Value::String(_)))
}
