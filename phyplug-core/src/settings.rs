use crate::ConfigError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory holding the plugin configuration files (`~/.phy`).
pub fn default_config_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".phy"),
        None => PathBuf::from("."),
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let data = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `value` as pretty-printed UTF-8 JSON, creating parent directories.
pub fn save_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut data = serde_json::to_vec_pretty(value).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    data.push(b'\n');
    std::fs::write(path, data).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a settings file, writing `defaults` first when it does not exist.
///
/// A file that cannot be read or decoded is left alone and `defaults` is
/// returned; this never fails.
pub fn load_or_init<T>(path: &Path, defaults: &T) -> T
where
    T: Serialize + DeserializeOwned + Clone,
{
    if !path.exists() {
        log::debug!("Create default config at {}.", path.display());
        if let Err(err) = save_pretty(path, defaults) {
            log::warn!("{err}");
        }
        return defaults.clone();
    }

    log::debug!("Load {} for config.", path.display());
    match read_json(path) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Error decoding JSON: {err}");
            defaults.clone()
        }
    }
}
