//! Theme for the wash screen TUI
//!
//! - `palette` — raw color constants for the chrome (panel, hints)
//! - `styles` — semantic style builder functions
//!
//! Grid cells bypass the palette entirely: their colors come straight
//! from the user's configuration via [`terminal_color`].

pub mod palette;
pub mod styles;

use ratatui::style::Color;

use scrub_core::{parse_hex, Rgb};

/// Map a configured hex color onto a terminal color
///
/// Unparseable values render white. Sanitization already warned about
/// them at load time, so no log here.
pub fn terminal_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some(Rgb { r, g, b }) => Color::Rgb(r, g, b),
        None => Color::White,
    }
}

/// Black or white, whichever reads better on top of `hex`
///
/// Uses the BT.601 luma weights. Unparseable values count as bright,
/// matching the white fallback of [`terminal_color`].
pub fn contrast_color(hex: &str) -> Color {
    let luma = match parse_hex(hex) {
        Some(Rgb { r, g, b }) => (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000,
        None => 255,
    };

    if luma >= 128 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_color_maps_channels() {
        assert_eq!(terminal_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(terminal_color("#000000"), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_terminal_color_expands_shorthand() {
        assert_eq!(terminal_color("#fa0"), Color::Rgb(255, 170, 0));
    }

    #[test]
    fn test_terminal_color_falls_back_to_white() {
        assert_eq!(terminal_color("teal"), Color::White);
        assert_eq!(terminal_color(""), Color::White);
    }

    #[test]
    fn test_contrast_on_light_colors_is_black() {
        assert_eq!(contrast_color("#ffffff"), Color::Black);
        assert_eq!(contrast_color("#ffff00"), Color::Black); // yellow reads as bright
    }

    #[test]
    fn test_contrast_on_dark_colors_is_white() {
        assert_eq!(contrast_color("#000000"), Color::White);
        assert_eq!(contrast_color("#ff0000"), Color::White); // pure red is dim
    }

    #[test]
    fn test_contrast_fallback_counts_as_bright() {
        assert_eq!(contrast_color("nonsense"), Color::Black);
    }
}
