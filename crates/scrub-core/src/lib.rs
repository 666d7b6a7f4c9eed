//! # scrub-core - Core Domain Types
//!
//! Foundation crate for Screen Scrub. Provides the persisted configuration,
//! the grid pattern functions, hex color handling, error types, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Configuration (`config`)
//! - [`Config`] - The persisted entity: grid dimensions, colors, pattern flag
//! - [`clamp_dimension()`] - Clamp a row/col count into the supported range
//!
//! ### Grid (`grid`)
//! - [`cell_color()`] - Color of the cell at a zero-based (row, col)
//! - [`cell_colors()`] - Row-major colors for the whole grid
//!
//! ### Colors (`color`)
//! - [`Rgb`], [`parse_hex()`] - Hex string to RGB channels
//! - [`colors_equal()`] - Case-insensitive color equality
//! - [`PRESETS`], [`active_preset()`] - The fixed swatch table
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use scrub_core::prelude::*;
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;

/// Prelude for common imports used throughout all Screen Scrub crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::{active_preset, colors_equal, is_valid_hex, parse_hex, Preset, Rgb, PRESETS};
pub use config::{clamp_dimension, Config, MAX_GRID_DIM, MIN_GRID_DIM};
pub use error::{Error, Result, ResultExt};
pub use grid::{cell_color, cell_colors};
