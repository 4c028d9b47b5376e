use phyplug_core::autosave::{check_validity, AUTOSAVE_FILE, DEFAULT_INTERVAL_MINUTES};
use phyplug_core::shortcuts::{DEFAULT_MODIFIER_ACTIONS, MODIFIER_FILE};
use phyplug_core::{
    load_or_init, AutosaveSettings, AutosaveStore, AutosaveTimer, ModifierSettings,
    ModifierStore, TickOutcome,
};

#[test]
fn load_or_init_writes_defaults_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("plugin.json");
    let defaults = AutosaveSettings::default();

    let loaded = load_or_init(&path, &defaults);
    assert_eq!(loaded, defaults);
    assert!(path.exists());

    std::fs::write(&path, r#"{"interval_minutes": 3}"#).expect("write");
    let loaded = load_or_init(&path, &defaults);
    assert_eq!(loaded.interval_minutes, 3.0);
    assert_eq!(loaded.interval_debug, 10);
}

#[test]
fn interval_validity_falls_back_to_default() {
    assert_eq!(check_validity(2.5), 2.5);
    assert_eq!(check_validity(0.1), DEFAULT_INTERVAL_MINUTES);
    assert_eq!(check_validity(-4.0), DEFAULT_INTERVAL_MINUTES);
    assert_eq!(check_validity(f64::NAN), DEFAULT_INTERVAL_MINUTES);
}

#[test]
fn autosave_store_repairs_and_persists_interval() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(AUTOSAVE_FILE);
    std::fs::write(&path, r#"{"interval_minutes": 0.05, "interval_debug": 0}"#).expect("write");

    let mut store = AutosaveStore::load(&path);
    assert_eq!(store.settings().interval_minutes, DEFAULT_INTERVAL_MINUTES);
    assert_eq!(store.settings().interval_debug, 10);

    assert_eq!(store.set_interval(2.0).expect("set interval"), 2.0);
    assert_eq!(AutosaveStore::in_dir(dir.path()).settings().interval_minutes, 2.0);

    assert_eq!(
        store.set_interval(0.0).expect("set interval"),
        DEFAULT_INTERVAL_MINUTES
    );
}

#[test]
fn whole_minute_intervals_are_written_as_integers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = AutosaveStore::in_dir(dir.path());
    let written = std::fs::read_to_string(store.path()).expect("read defaults");
    assert!(written.contains(r#""interval_minutes": 10,"#), "{written}");

    store.set_interval(2.5).expect("set interval");
    let written = std::fs::read_to_string(store.path()).expect("read interval");
    assert!(written.contains(r#""interval_minutes": 2.5,"#), "{written}");
}

#[test]
fn timer_requests_save_after_interval() {
    let settings = AutosaveSettings {
        interval_minutes: 0.5,
        interval_debug: 10,
    };
    let mut timer = AutosaveTimer::new();
    let outcomes: Vec<TickOutcome> = (0..31).map(|_| timer.tick(&settings)).collect();

    assert_eq!(outcomes[9], TickOutcome::Debug(10));
    assert_eq!(outcomes[29], TickOutcome::Debug(30));
    assert_eq!(outcomes[30], TickOutcome::Save);
    assert_eq!(
        outcomes.iter().filter(|o| **o == TickOutcome::Save).count(),
        1
    );

    timer.reset();
    assert_eq!(timer.count(), 0);
    assert_eq!(timer.tick(&settings), TickOutcome::Idle);
}

#[test]
fn modifier_store_fills_missing_keys_and_lowercases() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(MODIFIER_FILE);
    std::fs::write(&path, r#"{"modifier": "CTRL"}"#).expect("write");

    let mut store = ModifierStore::load(&path);
    assert!(!store.settings().enabled);
    assert_eq!(store.settings().modifier, "ctrl");
    assert_eq!(store.settings().actions.len(), DEFAULT_MODIFIER_ACTIONS.len());

    store.set_enabled(true).expect("enable");
    let reloaded = ModifierStore::in_dir(dir.path());
    assert!(reloaded.settings().enabled);
    assert_eq!(reloaded.settings().modifier, "ctrl");
}

#[test]
fn modifier_store_uses_defaults_on_corrupt_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(MODIFIER_FILE);
    std::fs::write(&path, "not json").expect("write");
    assert_eq!(ModifierStore::load(&path).settings(), &ModifierSettings::default());
}
