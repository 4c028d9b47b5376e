use phyplug_core::{AutosaveSettings, ModifierSettings};
use std::collections::BTreeMap;

pub fn print_info(message: &str) {
    println!("[phyplug][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[phyplug][ERROR]: {message}");
}

pub fn print_priority(columns: &[String]) {
    print_info(&format!("Secondary sorting: {}", columns.join(", ")));
}

pub fn print_autosave(settings: &AutosaveSettings) {
    print_info(&format!(
        "Auto-save interval: {} minutes",
        settings.interval_minutes
    ));
    println!("\tinterval_debug: {} seconds", settings.interval_debug);
}

pub fn print_modifier(settings: &ModifierSettings) {
    let state = if settings.enabled { "on" } else { "off" };
    print_info(&format!("Shortcut modifier '{}' is {state}", settings.modifier));
    println!("Actions:");
    for action in &settings.actions {
        println!("\t{action}");
    }
}

pub fn print_shortcuts(shortcuts: &BTreeMap<String, String>) {
    if shortcuts.is_empty() {
        print_info("No shortcuts given");
        return;
    }
    print_info("Shortcuts:");
    for (action, keys) in shortcuts {
        println!("\t{action}: {keys}");
    }
}

pub fn print_ids(ids: &[u64]) {
    for id in ids {
        println!("{id}");
    }
}
