use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use inventory_core::constants::{FRAME_VERTICAL_OFFSET, INV_CLOSE_BUTTON_X, INV_CLOSE_BUTTON_Y};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE_NAME: &str = "inventory_panel.json";
const SETTINGS_PATH_ENV: &str = "INVENTORY_PANEL_SETTINGS";
const DEFAULT_LOG_FILE: &str = "inventory_panel.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Distance from the panel origin down to the first border row.
    pub frame_vertical_offset: i32,
    pub close_button_x: i32,
    pub close_button_y: i32,
    pub log_level: String,
    pub log_file: Option<String>,
    /// Fill the inventory with the demo loadout on load.
    pub provision_test_items: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            frame_vertical_offset: FRAME_VERTICAL_OFFSET,
            close_button_x: INV_CLOSE_BUTTON_X,
            close_button_y: INV_CLOSE_BUTTON_Y,
            log_level: "info".to_string(),
            log_file: Some(DEFAULT_LOG_FILE.to_string()),
            provision_test_items: true,
        }
    }
}

impl PanelSettings {
    /// Parses `log_level`, falling back to `Info` for anything unrecognised.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn working_directory() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the settings file location.
///
/// # Returns
/// * `PathBuf` from `INVENTORY_PANEL_SETTINGS` when set, otherwise
///   `inventory_panel.json` in the working directory.
pub fn settings_file_path() -> PathBuf {
    match std::env::var(SETTINGS_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => working_directory().join(SETTINGS_FILE_NAME),
    }
}

/// Loads panel settings from `path`.
///
/// A missing or unreadable file yields the defaults; so does a file that is
/// not valid JSON. Unknown keys are ignored and missing keys take their
/// default value.
pub fn load_settings(path: &Path) -> PanelSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No settings file at {}, using defaults", path.display());
            return PanelSettings::default();
        }
        Err(e) => {
            log::warn!("Failed to read settings file {}: {e}", path.display());
            return PanelSettings::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to parse settings file {}: {e}", path.display());
            PanelSettings::default()
        }
    }
}

/// Writes `settings` to `path` as pretty JSON, creating parent directories.
pub fn save_settings(path: &Path, settings: &PanelSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
    fs::write(path, format!("{json}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("absent.json"));
        assert_eq!(settings, PanelSettings::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "frame_vertical_offset": 60, "log_level": "debug" }"#).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.frame_vertical_offset, 60);
        assert_eq!(settings.log_level_filter(), LevelFilter::Debug);
        assert_eq!(settings.close_button_x, INV_CLOSE_BUTTON_X);
        assert!(settings.provision_test_items);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings(&path), PanelSettings::default());
    }

    #[test]
    fn save_then_load_restores_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = PanelSettings {
            close_button_x: 10,
            log_file: None,
            provision_test_items: false,
            ..PanelSettings::default()
        };

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path), settings);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let settings = PanelSettings {
            log_level: "chatty".to_string(),
            ..PanelSettings::default()
        };
        assert_eq!(settings.log_level_filter(), LevelFilter::Info);
    }
}
