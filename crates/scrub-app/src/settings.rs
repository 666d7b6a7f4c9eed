//! Ambient application settings from settings.toml
//!
//! These are user preferences for the application shell (cursor dwell,
//! tick rate, panel visibility at startup). They are separate from the
//! grid configuration, which lives in the persistent state slot and is
//! written on every change.

use std::path::{Path, PathBuf};

use scrub_core::prelude::*;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "screen-scrub";

// ─────────────────────────────────────────────────────────────────────────────
// Settings Types
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub cursor: CursorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cursor: CursorSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Pointer cursor behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorSettings {
    /// Seconds the pointer may rest before the cursor marker hides
    #[serde(default = "default_dwell_secs")]
    pub dwell_secs: u64,
}

fn default_dwell_secs() -> u64 {
    3
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            dwell_secs: default_dwell_secs(),
        }
    }
}

/// UI behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Whether the controls panel is shown when the application starts
    #[serde(default = "default_panel_visible")]
    pub panel_visible_on_start: bool,
}

fn default_tick_ms() -> u64 {
    50
}

fn default_panel_visible() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            panel_visible_on_start: default_panel_visible(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Default settings directory: `<config_dir>/screen-scrub`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Load settings from settings.toml in the given directory.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let settings_path = config_dir.join(SETTINGS_FILENAME);

    if !settings_path.exists() {
        debug!("No settings file at {:?}, using defaults", settings_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&settings_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", settings_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", settings_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", settings_path, e);
            Settings::default()
        }
    }
}

/// Create a default settings.toml in the given directory if none exists.
///
/// The file goes through `save_settings`, so a fresh install starts from
/// exactly the template a later save would regenerate.
pub fn init_settings(config_dir: &Path) -> Result<()> {
    let settings_path = config_dir.join(SETTINGS_FILENAME);
    if settings_path.exists() {
        return Ok(());
    }

    save_settings(config_dir, &Settings::default())
}

/// Save settings to settings.toml in the given directory.
///
/// Uses atomic write (temp file + rename) for safety.
pub fn save_settings(config_dir: &Path, settings: &Settings) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create settings dir: {}", e)))?;
    }

    let settings_path = config_dir.join(SETTINGS_FILENAME);
    let temp_path = config_dir.join(".settings.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(&temp_path, format!("{}{}", settings_header(), content))
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &settings_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", settings_path);
    Ok(())
}

fn settings_header() -> &'static str {
    r#"# Screen Scrub Settings
#
# dwell_secs: seconds the pointer may rest before the cursor marker hides
# tick_ms: event poll interval in milliseconds
# panel_visible_on_start: show the controls panel at startup

"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cursor.dwell_secs, 3);
        assert_eq!(settings.ui.tick_ms, 50);
        assert!(settings.ui.panel_visible_on_start);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_invalid_toml_returns_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILENAME), "not [valid toml").unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_missing_sections() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILENAME),
            "[cursor]\ndwell_secs = 10\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.cursor.dwell_secs, 10);
        assert_eq!(settings.ui.tick_ms, 50);
        assert!(settings.ui.panel_visible_on_start);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.cursor.dwell_secs = 7;
        settings.ui.panel_visible_on_start = false;

        save_settings(dir.path(), &settings).unwrap();
        let loaded = load_settings(dir.path());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_init_writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        init_settings(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert!(content.starts_with("# Screen Scrub Settings"));

        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempdir().unwrap();
        init_settings(dir.path()).unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        assert!(path.exists());

        std::fs::write(&path, "[cursor]\ndwell_secs = 9\n").unwrap();
        init_settings(dir.path()).unwrap();

        // Existing file is left alone.
        let settings = load_settings(dir.path());
        assert_eq!(settings.cursor.dwell_secs, 9);
    }
}
