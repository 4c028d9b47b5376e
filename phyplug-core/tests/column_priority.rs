use phyplug_core::column_priority::PRIORITY_FILE;
use phyplug_core::{read_json, ColumnPriorityStore, ConfigError};

const AVAILABLE: [&str; 3] = ["id", "ch", "group"];

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ColumnPriorityStore::in_dir(dir.path());
    assert_eq!(store.columns(), &["ch", "group", "id"]);

    let path = dir.path().join(PRIORITY_FILE);
    assert!(path.exists());
    let stored: Vec<String> = read_json(&path).expect("read stored list");
    assert_eq!(stored, vec!["ch", "group", "id"]);
}

#[test]
fn corrupt_file_falls_back_to_defaults_and_is_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(PRIORITY_FILE);
    std::fs::write(&path, "[\"ch\", ").expect("write corrupt file");

    let store = ColumnPriorityStore::load(&path);
    assert_eq!(store.columns(), &["ch", "group", "id"]);
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "[\"ch\", ");
}

#[test]
fn wrong_shape_and_empty_lists_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(PRIORITY_FILE);

    std::fs::write(&path, r#"{"column_order": ["id"]}"#).expect("write");
    assert_eq!(ColumnPriorityStore::load(&path).columns(), &["ch", "group", "id"]);

    std::fs::write(&path, "[]").expect("write");
    assert_eq!(ColumnPriorityStore::load(&path).columns(), &["ch", "group", "id"]);
}

#[test]
fn reconfigure_drops_unknown_columns_and_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ColumnPriorityStore::in_dir(dir.path());

    let applied = store
        .reconfigure(&["ch", "bogus", "id"], &AVAILABLE)
        .expect("reconfigure");
    assert_eq!(applied.columns(), &["ch", "id"]);

    let reloaded = ColumnPriorityStore::in_dir(dir.path());
    assert_eq!(reloaded.columns(), &["ch", "id"]);
}

#[test]
fn reconfigure_with_only_unknown_columns_keeps_previous_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ColumnPriorityStore::in_dir(dir.path());
    store
        .reconfigure(&["group", "id"], &AVAILABLE)
        .expect("reconfigure");

    let err = store
        .reconfigure(&["bogus1", "bogus2"], &AVAILABLE)
        .unwrap_err();
    match err {
        ConfigError::NoValidColumns { requested } => {
            assert_eq!(requested, vec!["bogus1", "bogus2"])
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.columns(), &["group", "id"]);
    assert_eq!(
        ColumnPriorityStore::in_dir(dir.path()).columns(),
        &["group", "id"]
    );
}

#[test]
fn saved_file_is_pretty_printed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ColumnPriorityStore::in_dir(dir.path());
    store.save().expect("save");
    let text = std::fs::read_to_string(store.path()).expect("read");
    assert!(text.contains("\n  \"ch\""));
}
