//! The persisted grid configuration
//!
//! `Config` is the sole persisted entity: grid dimensions, the two colors,
//! and the checkerboard flag. Serialized field names keep the camelCase
//! wire form so existing state slots stay loadable. Unknown fields found
//! in a slot are carried in `extra` and written back on save.

use serde::{Deserialize, Serialize};

use crate::color;

/// Grid dimensions accepted from any source are clamped into this range.
pub const MIN_GRID_DIM: u16 = 1;
pub const MAX_GRID_DIM: u16 = 64;

/// The persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Grid row count, always in `MIN_GRID_DIM..=MAX_GRID_DIM`
    #[serde(default = "default_rows")]
    pub rows: u16,

    /// Grid column count, always in `MIN_GRID_DIM..=MAX_GRID_DIM`
    #[serde(default = "default_cols")]
    pub cols: u16,

    /// Hex color for every cell, and for even-parity cells in
    /// checkerboard mode
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    /// Hex color for odd-parity cells in checkerboard mode; stored but
    /// visually inert while the flag is off
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,

    /// Whether the grid alternates colors by (row + col) parity
    #[serde(default)]
    pub is_checkerboard: bool,

    /// Unknown fields from the slot, preserved across a load/save cycle
    /// but never interpreted
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_rows() -> u16 {
    4
}

fn default_cols() -> u16 {
    4
}

fn default_primary_color() -> String {
    "#ffffff".to_string()
}

fn default_secondary_color() -> String {
    "#000000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            is_checkerboard: false,
            extra: serde_json::Map::new(),
        }
    }
}

/// Clamp a grid dimension into the supported range
pub fn clamp_dimension(value: u16) -> u16 {
    value.clamp(MIN_GRID_DIM, MAX_GRID_DIM)
}

impl Config {
    /// Repair values arriving from a persisted slot.
    ///
    /// Dimensions clamp into range; a color that does not parse as hex is
    /// reset to its default so the renderer never sees it. Each repair is
    /// logged.
    pub fn sanitize(&mut self) {
        let clamped_rows = clamp_dimension(self.rows);
        if clamped_rows != self.rows {
            tracing::warn!("Clamped persisted rows {} to {}", self.rows, clamped_rows);
            self.rows = clamped_rows;
        }

        let clamped_cols = clamp_dimension(self.cols);
        if clamped_cols != self.cols {
            tracing::warn!("Clamped persisted cols {} to {}", self.cols, clamped_cols);
            self.cols = clamped_cols;
        }

        if !color::is_valid_hex(&self.primary_color) {
            tracing::warn!(
                "Discarded invalid persisted primary color {:?}",
                self.primary_color
            );
            self.primary_color = default_primary_color();
        }

        if !color::is_valid_hex(&self.secondary_color) {
            tracing::warn!(
                "Discarded invalid persisted secondary color {:?}",
                self.secondary_color
            );
            self.secondary_color = default_secondary_color();
        }
    }

    /// Total cell count for the current dimensions
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 4);
        assert_eq!(config.primary_color, "#ffffff");
        assert_eq!(config.secondary_color, "#000000");
        assert!(!config.is_checkerboard);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"primaryColor\""));
        assert!(json.contains("\"secondaryColor\""));
        assert!(json.contains("\"isCheckerboard\""));
        assert!(json.contains("\"rows\""));
        assert!(json.contains("\"cols\""));
    }

    #[test]
    fn test_partial_blob_merges_over_defaults() {
        // Missing fields take their defaults, present fields win.
        let config: Config = serde_json::from_str(r##"{"rows": 7}"##).unwrap();
        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 4);
        assert_eq!(config.primary_color, "#ffffff");
        assert_eq!(config.secondary_color, "#000000");
        assert!(!config.is_checkerboard);
    }

    #[test]
    fn test_full_blob_reproduces_exactly() {
        let json = r##"{
            "rows": 2,
            "cols": 3,
            "primaryColor": "#abcdef",
            "secondaryColor": "#123456",
            "isCheckerboard": true
        }"##;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.rows, 2);
        assert_eq!(config.cols, 3);
        assert_eq!(config.primary_color, "#abcdef");
        assert_eq!(config.secondary_color, "#123456");
        assert!(config.is_checkerboard);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = r##"{"rows": 5, "futureField": "kept", "nested": {"a": 1}}"##;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.extra.len(), 2);

        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains("\"futureField\":\"kept\""));
        assert!(out.contains("\"nested\""));
    }

    #[test]
    fn test_sanitize_clamps_dimensions() {
        let mut config = Config {
            rows: 0,
            cols: 4000,
            ..Config::default()
        };
        config.sanitize();
        assert_eq!(config.rows, MIN_GRID_DIM);
        assert_eq!(config.cols, MAX_GRID_DIM);
    }

    #[test]
    fn test_sanitize_resets_invalid_colors() {
        let mut config = Config {
            primary_color: "not-a-color".to_string(),
            secondary_color: "#12".to_string(),
            ..Config::default()
        };
        config.sanitize();
        assert_eq!(config.primary_color, "#ffffff");
        assert_eq!(config.secondary_color, "#000000");
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let mut config = Config {
            rows: 64,
            cols: 1,
            primary_color: "#FFF".to_string(),
            secondary_color: "#1a2b3c".to_string(),
            is_checkerboard: true,
            ..Config::default()
        };
        let before = config.clone();
        config.sanitize();
        assert_eq!(config, before);
    }

    #[test]
    fn test_clamp_dimension() {
        assert_eq!(clamp_dimension(0), 1);
        assert_eq!(clamp_dimension(1), 1);
        assert_eq!(clamp_dimension(32), 32);
        assert_eq!(clamp_dimension(64), 64);
        assert_eq!(clamp_dimension(65), 64);
        assert_eq!(clamp_dimension(u16::MAX), 64);
    }

    #[test]
    fn test_cell_count() {
        let config = Config {
            rows: 3,
            cols: 5,
            ..Config::default()
        };
        assert_eq!(config.cell_count(), 15);
    }
}
