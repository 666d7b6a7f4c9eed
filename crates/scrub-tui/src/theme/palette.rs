//! Color palette for the panel chrome and overlays
//!
//! Only the chrome draws from this palette. Grid cells take their
//! colors from the user's configuration.

use ratatui::style::Color;

// --- Surfaces ---
pub const PANEL_BG: Color = Color::Rgb(24, 26, 32);
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;

// --- Keybinding hints ---
pub const HINT_KEY: Color = Color::Yellow;
