use std::path::Path;
use std::process::{Command, Output};

fn phyplug(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_phyplug"))
        .arg("--config-dir")
        .arg(config_dir)
        .args(args)
        .output()
        .expect("run phyplug")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn write_rows(dir: &Path) -> String {
    let path = dir.join("rows.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 4, "ch": "10", "group": "good", "fr": 3.5},
            {"id": 1, "ch": "2", "group": "noise", "fr": 3.5},
            {"id": 7, "ch": "2", "group": "good", "fr": 1.0},
            {"id": 3, "ch": "10", "group": "good", "fr": 1.0},
            {"id": 5, "ch": "2", "group": "good", "fr": 3.5}
        ]"#,
    )
    .expect("write rows");
    path.to_string_lossy().to_string()
}

fn ids(output: &Output) -> Vec<u64> {
    stdout(output)
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

#[test]
fn sort_uses_stored_priority() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rows = write_rows(dir.path());

    let output = phyplug(dir.path(), &["sort", &rows, "--by", "fr", "--desc"]);
    assert!(output.status.success());
    assert_eq!(ids(&output), vec![5, 1, 4, 7, 3]);
}

#[test]
fn sort_with_explicit_priority_and_json_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rows = write_rows(dir.path());

    let output = phyplug(
        dir.path(),
        &["sort", &rows, "--by", "ch", "--priority", "fr,id", "--json"],
    );
    assert!(output.status.success());
    let sorted: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("json rows");
    let ids: Vec<u64> = sorted.iter().filter_map(|row| row["id"].as_u64()).collect();
    assert_eq!(ids, vec![7, 1, 5, 3, 4]);
    assert!(stdout(&output).contains("\"id\": 7\n"));
}

#[test]
fn priority_set_filters_and_persists() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = phyplug(
        dir.path(),
        &["priority", "set", "ch,bogus,id", "--columns", "id,ch,group"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Secondary sorting: ch, id"));

    let output = phyplug(dir.path(), &["priority", "show"]);
    assert!(stdout(&output).contains("Secondary sorting: ch, id"));
}

#[test]
fn priority_set_with_only_unknown_columns_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = phyplug(dir.path(), &["priority", "set", "bogus1,bogus2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[phyplug][ERROR]"));

    let output = phyplug(dir.path(), &["priority", "show"]);
    assert!(stdout(&output).contains("Secondary sorting: ch, group, id"));
}

#[test]
fn autosave_interval_round_trips_through_config() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = phyplug(dir.path(), &["autosave", "set", "2.5"]);
    assert!(output.status.success());
    let output = phyplug(dir.path(), &["autosave", "show"]);
    assert!(stdout(&output).contains("Auto-save interval: 2.5 minutes"));
}

#[test]
fn modifier_toggle_rewrites_given_shortcuts() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = phyplug(
        dir.path(),
        &[
            "modifier",
            "toggle",
            "off",
            "--shortcut",
            "Add comment=alt+c",
            "--shortcut",
            "Visualize duplicates=alt+w",
        ],
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Add comment: c"));
    assert!(text.contains("Visualize duplicates: r"));
    assert!(text.contains("is off"));

    let output = phyplug(dir.path(), &["modifier", "toggle", "on"]);
    assert!(stdout(&output).contains("Shortcut modifier 'alt' is on"));
}

#[test]
fn malformed_shortcut_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = phyplug(dir.path(), &["modifier", "toggle", "on", "--shortcut", "oops"]);
    assert!(!output.status.success());
}
