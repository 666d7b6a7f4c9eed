//! Grid pattern derivation
//!
//! Pure functions from a `Config` snapshot to cell colors. The display
//! layer decides geometry; this module only answers "what color is the
//! cell at (row, col)".

use crate::config::Config;

/// Color for the cell at zero-based `(row, col)`.
///
/// Checkerboard off: every cell is the primary color. Checkerboard on:
/// odd `(row + col)` parity cells take the secondary color.
pub fn cell_color(config: &Config, row: u16, col: u16) -> &str {
    if config.is_checkerboard && (row as u32 + col as u32) % 2 == 1 {
        &config.secondary_color
    } else {
        &config.primary_color
    }
}

/// Row-major cell colors for the whole grid, one entry per cell.
///
/// Index `i` maps to `row = i / cols`, `col = i % cols`, scanning
/// `0..rows*cols` exactly as the grid is laid out on screen.
pub fn cell_colors(config: &Config) -> Vec<&str> {
    let cols = config.cols as usize;
    (0..config.cell_count())
        .map(|i| cell_color(config, (i / cols) as u16, (i % cols) as u16))
        .collect()
}
