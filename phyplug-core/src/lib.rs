use std::path::PathBuf;

pub mod autosave;
pub mod column_priority;
pub mod settings;
pub mod shortcuts;
pub mod validation;

pub use autosave::{AutosaveSettings, AutosaveStore, AutosaveTimer, TickOutcome};
pub use column_priority::{parse_column_list, ColumnPriorityStore};
pub use settings::{default_config_dir, load_or_init, read_json, save_pretty};
pub use shortcuts::{rewrite_shortcut, ModifierSettings, ModifierStore};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("none of the requested columns exist: {}", .requested.join(", "))]
    NoValidColumns { requested: Vec<String> },
}
