//! Persistent user settings.
//!
//! A single pretty-printed JSON file. Loading never fails: a missing or
//! unreadable file just yields defaults, so first launch and a corrupted
//! settings file behave the same.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::services::providers::Provider;
use crate::types::AppResult;

const SETTINGS_DIR_NAME: &str = "mantella-voices";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserSettings {
    /// Install directory of the active voice-synthesis tool.
    #[serde(default)]
    pub synth_directory: Option<String>,
    /// Which provider's directory layout to scan.
    #[serde(default)]
    pub provider: Provider,
}

impl UserSettings {
    pub fn synth_dir_path(&self) -> Option<PathBuf> {
        self.synth_directory
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
    }
}

/// Default settings file location: `<config_dir>/mantella-voices/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join(SETTINGS_DIR_NAME)
            .join(SETTINGS_FILE_NAME),
    )
}

/// Load settings, falling back to defaults on any failure.
pub fn load_settings(path: &Path) -> UserSettings {
    if !path.exists() {
        return UserSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to parse settings file: {e}");
                UserSettings::default()
            }
        },
        Err(e) => {
            log::error!("Failed to read settings file: {e}");
            UserSettings::default()
        }
    }
}

/// Save settings, creating the parent directory on demand.
pub fn save_settings(path: &Path, settings: &UserSettings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
