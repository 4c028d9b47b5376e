use crate::settings::{load_or_init, save_pretty};
use crate::validation::Validator;
use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MODIFIER_FILE: &str = "plugin_togglemodifier.json";
pub const DEFAULT_MODIFIER: &str = "alt";
pub const DEFAULT_MODIFIER_ACTIONS: [&str; 12] = [
    "K_means_clustering",
    "K_means_clustering_amplitude",
    "Split by Mahalanobis distance",
    "Visualize short ISI",
    "Visualize duplicates",
    "Add comment",
    "Assign_quality_1",
    "Assign_quality_2",
    "Assign_quality_3",
    "Assign_quality_4",
    "Remove_quality_assigment",
    "Reverse selection",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_modifier")]
    pub modifier: String,
    #[serde(default = "default_actions")]
    pub actions: Vec<String>,
}

fn default_modifier() -> String {
    DEFAULT_MODIFIER.to_string()
}

fn default_actions() -> Vec<String> {
    DEFAULT_MODIFIER_ACTIONS
        .iter()
        .map(|a| a.to_string())
        .collect()
}

impl Default for ModifierSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            modifier: default_modifier(),
            actions: default_actions(),
        }
    }
}

/// Adds or strips the `"{modifier}+"` prefix of `shortcut`.
///
/// A bare `w` would clash with the waveform view and becomes `r`; the
/// reverse mapping turns `alt+r` back into `alt+w`.
pub fn rewrite_shortcut(shortcut: &str, modifier: &str, with_modifier: bool) -> String {
    let prefix = format!("{modifier}+");
    let rewritten = match (shortcut.strip_prefix(&prefix), with_modifier) {
        (Some(bare), false) => bare.to_string(),
        (None, true) => format!("{prefix}{shortcut}"),
        _ => shortcut.to_string(),
    };
    match rewritten.as_str() {
        "w" => "r".to_string(),
        "alt+r" => "alt+w".to_string(),
        _ => rewritten,
    }
}

#[derive(Debug, Clone)]
pub struct ModifierStore {
    path: PathBuf,
    settings: ModifierSettings,
}

impl ModifierStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut settings = load_or_init(&path, &ModifierSettings::default());
        settings.modifier = Validator::normalize_modifier(&settings.modifier);
        Self { path, settings }
    }

    pub fn in_dir(config_dir: &Path) -> Self {
        Self::load(config_dir.join(MODIFIER_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &ModifierSettings {
        &self.settings
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.settings.enabled = enabled;
        self.save()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        save_pretty(&self.path, &self.settings)
    }
}
