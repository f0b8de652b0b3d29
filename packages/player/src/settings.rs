//! Settings persistence: a JSON document under the user's config
//! directory. Loading is tolerant: a missing, partial or corrupt file
//! degrades to defaults with a warning, never an error.

use std::path::{Path, PathBuf};

use phonics_core::PlayerSettings;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Default settings location, when the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("phonics-player").join("settings.json"))
}

pub fn load(path: &Path) -> PlayerSettings {
    match std::fs::read_to_string(path) {
        Ok(json) => PlayerSettings::from_json_lossy(&json),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => PlayerSettings::default(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read settings");
            PlayerSettings::default()
        }
    }
}

pub fn save(path: &Path, settings: &PlayerSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}
