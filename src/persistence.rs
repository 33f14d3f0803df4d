use anyhow::Context;
use serde_json::Value;

use crate::state::{LauncherState, STATE_VERSION};
use crate::store::KeyValueStore;
use crate::validate::is_valid_state;

pub const STORAGE_KEY: &str = "launcher_state_v1";

/// Loads and saves [`LauncherState`] under [`STORAGE_KEY`].
///
/// Loading never fails: missing, malformed or structurally invalid data is
/// replaced by the default state. Saving reports store errors to the caller.
pub struct StateGateway<S: KeyValueStore> {
    store: S,
    default_state: Box<dyn Fn() -> LauncherState>,
}

impl<S: KeyValueStore> StateGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_default_factory(store, LauncherState::default)
    }

    pub fn with_default_factory(
        store: S,
        default_state: impl Fn() -> LauncherState + 'static,
    ) -> Self {
        Self {
            store,
            default_state: Box::new(default_state),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_state(&self) -> LauncherState {
        let Some(raw) = self.store.get(STORAGE_KEY).filter(|raw| !raw.is_empty()) else {
            tracing::debug!("no stored launcher state; using defaults");
            return (self.default_state)();
        };
        match parse_state(&raw) {
            Some(mut state) => {
                let previous = state.active_group_id.clone();
                if state.repair_active_group() {
                    tracing::debug!(
                        from = %previous,
                        to = %state.active_group_id,
                        "repaired dangling active group"
                    );
                }
                state
            }
            None => (self.default_state)(),
        }
    }

    pub fn save_state(&self, state: &LauncherState) -> anyhow::Result<()> {
        let json = serde_json::to_string(state).context("serializing launcher state")?;
        self.store
            .set(STORAGE_KEY, &json)
            .context("writing launcher state")?;
        Ok(())
    }
}

/// Parses and validates a stored document without applying the repair pass.
pub fn parse_state(raw: &str) -> Option<LauncherState> {
    let mut value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "stored launcher state is not valid JSON; using defaults");
            return None;
        }
    };
    if !is_valid_state(&value) {
        tracing::warn!("stored launcher state failed validation; using defaults");
        return None;
    }
    // `1.0` passes validation but does not decode into the integer field.
    value["version"] = Value::from(STATE_VERSION);
    match serde_json::from_value(value) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(error = %e, "stored launcher state could not be decoded; using defaults");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn empty_value_is_cold_start() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "").unwrap();
        let gateway = StateGateway::new(store);
        assert_eq!(gateway.load_state(), LauncherState::default());
    }

    #[test]
    fn parse_state_skips_repair() {
        let raw = r#"{"version":1,"activeGroupId":"gone","groups":[{"id":"a","name":"A","apps":[]}]}"#;
        let state = parse_state(raw).expect("valid state");
        assert_eq!(state.active_group_id, "gone");
    }

    #[test]
    fn float_version_decodes_as_integer() {
        let raw = r#"{"version":1.0,"activeGroupId":"w","groups":[{"id":"w","name":"Work","apps":[]}]}"#;
        let state = parse_state(raw).expect("valid state");
        assert_eq!(state.version, 1);
        assert_eq!(state.groups[0].name, "Work");
    }
}
