use crate::settings::{load_or_init, save_pretty};
use crate::validation::Validator;
use crate::ConfigError;
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

pub const AUTOSAVE_FILE: &str = "plugin_autosave.json";
pub const DEFAULT_INTERVAL_MINUTES: f64 = 10.0;
pub const DEFAULT_INTERVAL_DEBUG: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutosaveSettings {
    #[serde(
        default = "default_interval_minutes",
        serialize_with = "serialize_minutes"
    )]
    pub interval_minutes: f64,
    /// Seconds between debug log lines of the counter.
    #[serde(default = "default_interval_debug")]
    pub interval_debug: u64,
}

fn default_interval_minutes() -> f64 {
    DEFAULT_INTERVAL_MINUTES
}

/// Whole minutes are written as integers, as users type them.
fn serialize_minutes<S: Serializer>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if minutes.fract() == 0.0 && minutes.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}

fn default_interval_debug() -> u64 {
    DEFAULT_INTERVAL_DEBUG
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            interval_debug: DEFAULT_INTERVAL_DEBUG,
        }
    }
}

/// Returns `interval` if usable, the default interval otherwise.
pub fn check_validity(interval: f64) -> f64 {
    if Validator::is_valid_interval(interval) {
        interval
    } else {
        log::warn!(
            "Invalid value for interval_minutes '{interval}'. Setting to {DEFAULT_INTERVAL_MINUTES} (default)."
        );
        DEFAULT_INTERVAL_MINUTES
    }
}

#[derive(Debug, Clone)]
pub struct AutosaveStore {
    path: PathBuf,
    settings: AutosaveSettings,
}

impl AutosaveStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut settings = load_or_init(&path, &AutosaveSettings::default());
        settings.interval_minutes = check_validity(settings.interval_minutes);
        Validator::normalize_debug_interval(&mut settings.interval_debug, DEFAULT_INTERVAL_DEBUG);
        let store = Self { path, settings };
        store.show_update();
        store
    }

    pub fn in_dir(config_dir: &Path) -> Self {
        Self::load(config_dir.join(AUTOSAVE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &AutosaveSettings {
        &self.settings
    }

    /// Validates and persists a new interval, returning the value in effect.
    pub fn set_interval(&mut self, minutes: f64) -> Result<f64, ConfigError> {
        self.settings.interval_minutes = check_validity(minutes);
        self.save()?;
        self.show_update();
        Ok(self.settings.interval_minutes)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        save_pretty(&self.path, &self.settings)
    }

    fn show_update(&self) {
        log::info!(
            "Auto-save interval set to {} minutes.",
            self.settings.interval_minutes
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    /// Seconds elapsed, reported every `interval_debug` seconds.
    Debug(u64),
    Save,
}

/// Seconds since the last save, advanced by a one-second host timer.
#[derive(Debug, Clone, Default)]
pub struct AutosaveTimer {
    count: u64,
}

impl AutosaveTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn tick(&mut self, settings: &AutosaveSettings) -> TickOutcome {
        self.count += 1;
        if self.count as f64 > settings.interval_minutes * 60.0 {
            TickOutcome::Save
        } else if settings.interval_debug > 0 && self.count % settings.interval_debug == 0 {
            TickOutcome::Debug(self.count)
        } else {
            TickOutcome::Idle
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
