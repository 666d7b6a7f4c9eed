//! Hex color parsing and the preset swatch table
//!
//! Colors travel through the app as the raw hex strings the user entered
//! (or a preset supplied), so equality and persistence keep the exact
//! spelling. Parsing to RGB channels happens only at the display edge.

/// A color parsed into 8-bit RGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A fixed preset swatch: display name plus its hex value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub value: &'static str,
}

/// Preset swatches shared by the primary and secondary color rows.
/// Digits 1-8 select them in the controls panel.
pub const PRESETS: [Preset; 8] = [
    Preset {
        name: "White",
        value: "#ffffff",
    },
    Preset {
        name: "Black",
        value: "#000000",
    },
    Preset {
        name: "Red",
        value: "#ff0000",
    },
    Preset {
        name: "Green",
        value: "#00ff00",
    },
    Preset {
        name: "Blue",
        value: "#0000ff",
    },
    Preset {
        name: "Yellow",
        value: "#ffff00",
    },
    Preset {
        name: "Cyan",
        value: "#00ffff",
    },
    Preset {
        name: "Magenta",
        value: "#ff00ff",
    },
];

/// Parse a `#rgb` or `#rrggbb` hex string into RGB channels.
///
/// Shorthand digits are doubled (`#fa0` → `#ffaa00`). Anything else,
/// including a missing `#` or non-hex digits, returns `None`.
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Some(Rgb {
                r: r << 4 | r,
                g: g << 4 | g,
                b: b << 4 | b,
            })
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            })
        }
        _ => None,
    }
}

/// Whether a string is a well-formed hex color
pub fn is_valid_hex(value: &str) -> bool {
    parse_hex(value).is_some()
}

/// Case-insensitive color equality on the raw strings.
///
/// Spelling matters: `#fff` and `#ffffff` are distinct values even though
/// they parse to the same channels. Only letter case is ignored.
pub fn colors_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Index of the preset whose value matches `color`, if any.
///
/// A free-form color equal in value to a preset matches it; a color
/// matching no preset is the valid "custom color" state.
pub fn active_preset(color: &str) -> Option<usize> {
    PRESETS.iter().position(|p| colors_equal(p.value, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_full_form() {
        assert_eq!(
            parse_hex("#ffffff"),
            Some(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(parse_hex("#000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(parse_hex("#1a2B3c"), Some(Rgb { r: 26, g: 43, b: 60 }));
    }

    #[test]
    fn test_parse_hex_shorthand_doubles_digits() {
        assert_eq!(
            parse_hex("#fff"),
            Some(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(
            parse_hex("#fa0"),
            Some(Rgb {
                r: 255,
                g: 170,
                b: 0
            })
        );
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex("ffffff"), None); // no hash
        assert_eq!(parse_hex("#ffff"), None); // wrong length
        assert_eq!(parse_hex("#fffffff"), None);
        assert_eq!(parse_hex("#ggg"), None); // non-hex digit
        assert_eq!(parse_hex("#12345z"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#"), None);
    }

    #[test]
    fn test_colors_equal_ignores_case() {
        assert!(colors_equal("#FFFFFF", "#ffffff"));
        assert!(colors_equal("#AbCdEf", "#aBcDeF"));
        assert!(!colors_equal("#ffffff", "#fffffe"));
    }

    #[test]
    fn test_shorthand_not_equal_to_expanded() {
        // Equality is on the spelling, not the parsed channels.
        assert!(!colors_equal("#fff", "#ffffff"));
        assert_eq!(parse_hex("#fff"), parse_hex("#ffffff"));
    }

    #[test]
    fn test_active_preset_matches_case_insensitively() {
        assert_eq!(active_preset("#ffffff"), Some(0));
        assert_eq!(active_preset("#FFFFFF"), Some(0));
        assert_eq!(active_preset("#FF00ff"), Some(7));
    }

    #[test]
    fn test_active_preset_none_for_custom_color() {
        assert_eq!(active_preset("#123456"), None);
        // Shorthand spelling of a preset is still a custom color.
        assert_eq!(active_preset("#fff"), None);
    }

    #[test]
    fn test_presets_are_well_formed() {
        for preset in PRESETS {
            assert!(is_valid_hex(preset.value), "{} invalid", preset.name);
        }
    }
}
