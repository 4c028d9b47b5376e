use crate::settings::{load_or_init, save_pretty};
use crate::ConfigError;
use cluster_order::ColumnPriority;
use std::path::{Path, PathBuf};

pub const PRIORITY_FILE: &str = "plugin_sortclusterview.json";

/// Owns the persisted secondary sort order of the cluster view.
#[derive(Debug, Clone)]
pub struct ColumnPriorityStore {
    path: PathBuf,
    priority: ColumnPriority,
}

impl ColumnPriorityStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut priority = load_or_init(&path, &ColumnPriority::default());
        if priority.is_empty() {
            log::warn!(
                "Empty column order in {}, using the default.",
                path.display()
            );
            priority = ColumnPriority::default();
        }
        Self { path, priority }
    }

    pub fn in_dir(config_dir: &Path) -> Self {
        Self::load(config_dir.join(PRIORITY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn priority(&self) -> &ColumnPriority {
        &self.priority
    }

    pub fn columns(&self) -> &[String] {
        self.priority.columns()
    }

    pub fn validate<C, A>(candidate: &[C], available: &[A]) -> ColumnPriority
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        ColumnPriority::validated(candidate, available)
    }

    /// Replaces the stored order with the valid part of `candidate`.
    ///
    /// When no candidate column is available nothing changes and
    /// `ConfigError::NoValidColumns` is returned.
    pub fn reconfigure<C, A>(
        &mut self,
        candidate: &[C],
        available: &[A],
    ) -> Result<&ColumnPriority, ConfigError>
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        let validated = Self::validate(candidate, available);
        if validated.is_empty() {
            return Err(ConfigError::NoValidColumns {
                requested: candidate.iter().map(|c| c.as_ref().to_string()).collect(),
            });
        }
        save_pretty(&self.path, &validated)?;
        self.priority = validated;
        log::info!("Set secondary sorting to {}", self.priority.columns().join(", "));
        Ok(&self.priority)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        save_pretty(&self.path, &self.priority)
    }
}

/// Splits command input such as `"ch, group,id"` into column names.
pub fn parse_column_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
