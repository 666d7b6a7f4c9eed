//! Persistent state slot for the grid configuration
//!
//! The configuration is stored as a single JSON blob. Loading merges the
//! blob over defaults field by field (absent fields keep their defaults)
//! and preserves unknown fields, so a slot written by a newer version
//! survives a load/save cycle here. A corrupt blob is discarded and
//! defaults are used; first launch starts from defaults silently.

use std::path::{Path, PathBuf};

use scrub_core::prelude::*;
use scrub_core::Config;

use crate::settings::APP_DIR_NAME;

pub const STATE_FILENAME: &str = "state.json";

const TEMP_FILENAME: &str = ".state.json.tmp";

/// Default state directory: `<data_local_dir>/screen-scrub`
pub fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Default path of the state slot
pub fn default_state_path() -> PathBuf {
    default_state_dir().join(STATE_FILENAME)
}

/// Path of the state slot inside the given directory
pub fn state_path(state_dir: &Path) -> PathBuf {
    state_dir.join(STATE_FILENAME)
}

/// Load the configuration from the state slot.
///
/// Returns defaults if the slot doesn't exist or holds a blob that can't
/// be parsed. Loaded values are sanitized before use.
pub fn load_state(path: &Path) -> Config {
    if !path.exists() {
        debug!("No saved state at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Config>(&content) {
            Ok(mut config) => {
                debug!("Loaded state from {:?}", path);
                config.sanitize();
                config
            }
            Err(e) => {
                error!("Discarding corrupt state at {:?}: {}", path, e);
                Config::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save the configuration to the state slot.
///
/// Uses atomic write (temp file + rename) so a crash mid-write never
/// leaves a truncated blob behind.
pub fn save_state(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::state(format!("Failed to create state dir: {}", e)))?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;

    let temp_path = match path.parent() {
        Some(dir) => dir.join(TEMP_FILENAME),
        None => PathBuf::from(TEMP_FILENAME),
    };

    std::fs::write(&temp_path, content)
        .map_err(|e| Error::state(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::state(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved state to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_slot_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = load_state(&state_path(dir.path()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = state_path(dir.path());

        let mut config = Config::default();
        config.rows = 8;
        config.cols = 12;
        config.primary_color = "#ff0000".to_string();
        config.is_checkerboard = true;

        save_state(&path, &config).unwrap();
        assert_eq!(load_state(&path), config);
    }

    #[test]
    fn test_load_corrupt_blob_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = state_path(dir.path());
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(load_state(&path), Config::default());
    }

    #[test]
    fn test_partial_blob_merges_over_defaults() {
        let dir = tempdir().unwrap();
        let path = state_path(dir.path());
        std::fs::write(&path, r#"{"rows": 9}"#).unwrap();

        let config = load_state(&path);
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 4);
        assert_eq!(config.primary_color, "#ffffff");
        assert!(!config.is_checkerboard);
    }

    #[test]
    fn test_load_sanitizes_out_of_range_values() {
        let dir = tempdir().unwrap();
        let path = state_path(dir.path());
        std::fs::write(&path, r#"{"rows": 5000, "primaryColor": "teal"}"#).unwrap();

        let config = load_state(&path);
        assert_eq!(config.rows, scrub_core::MAX_GRID_DIM);
        assert_eq!(config.primary_color, "#ffffff");
    }

    #[test]
    fn test_unknown_fields_survive_load_save_cycle() {
        let dir = tempdir().unwrap();
        let path = state_path(dir.path());
        std::fs::write(&path, r#"{"rows": 2, "futureFlag": true}"#).unwrap();

        let config = load_state(&path);
        save_state(&path, &config).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("futureFlag"));
        assert!(raw.contains("\"rows\": 2"));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(STATE_FILENAME);

        save_state(&path, &Config::default()).unwrap();
        assert!(path.exists());
    }
}
