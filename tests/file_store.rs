use group_launcher::persistence::{StateGateway, STORAGE_KEY};
use group_launcher::state::LauncherState;
use group_launcher::store::{FileStore, KeyValueStore};
use tempfile::tempdir;

#[test]
fn missing_file_reads_as_absent() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));
    assert_eq!(store.get(STORAGE_KEY), None);
}

#[test]
fn set_creates_directory_and_replaces_value() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();

    assert_eq!(store.get("k").as_deref(), Some("two"));
    let path = store.path_for("k").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "two");
    assert!(!dir.path().join("nested").join("k.json.tmp").exists());
}

#[test]
fn gateway_persists_across_instances() {
    let dir = tempdir().unwrap();
    let mut state = LauncherState::default();
    state.groups[0].name = "Renamed".into();

    StateGateway::new(FileStore::new(dir.path()))
        .save_state(&state)
        .unwrap();
    let loaded = StateGateway::new(FileStore::new(dir.path())).load_state();
    assert_eq!(loaded, state);
}

#[test]
fn hand_edited_garbage_recovers_default() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::write(store.path_for(STORAGE_KEY).unwrap(), "{\"version\":1,").unwrap();
    assert_eq!(StateGateway::new(store).load_state(), LauncherState::default());
}
