//! Tests for controls_panel widget module

use super::*;
use crate::theme::palette;
use ratatui::{backend::TestBackend, Terminal};

fn test_config() -> Config {
    Config {
        rows: 12,
        cols: 16,
        primary_color: "#ffffff".to_string(),
        secondary_color: "#000000".to_string(),
        is_checkerboard: false,
        ..Config::default()
    }
}

fn test_panel() -> PanelState {
    PanelState {
        visible: true,
        focus: PanelControl::Rows,
        edit: None,
    }
}

fn render_panel(config: &Config, panel: &PanelState) -> Buffer {
    let backend = TestBackend::new(60, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            frame.render_widget(ControlsPanel::new(config, panel), frame.area());
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn content_of(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn row_strings(buffer: &Buffer) -> Vec<String> {
    let area = *buffer.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn test_panel_lists_all_controls() {
    let buffer = render_panel(&test_config(), &test_panel());
    let content = content_of(&buffer);

    assert!(content.contains("Controls"));
    assert!(content.contains("Rows"));
    assert!(content.contains("Columns"));
    assert!(content.contains("Primary color"));
    assert!(content.contains("Checkerboard"));
}

#[test]
fn test_secondary_row_hidden_without_checkerboard() {
    let buffer = render_panel(&test_config(), &test_panel());
    assert!(!content_of(&buffer).contains("Secondary color"));
}

#[test]
fn test_secondary_row_appears_with_checkerboard() {
    let config = Config {
        is_checkerboard: true,
        ..test_config()
    };
    let buffer = render_panel(&config, &test_panel());
    let content = content_of(&buffer);

    assert!(content.contains("Secondary color"));
    assert!(content.contains("#000000"));
}

#[test]
fn test_values_rendered() {
    let buffer = render_panel(&test_config(), &test_panel());
    let content = content_of(&buffer);

    assert!(content.contains("12"));
    assert!(content.contains("16"));
    assert!(content.contains("#ffffff"));
}

#[test]
fn test_checkerboard_row_shows_toggle_state() {
    let rows = row_strings(&render_panel(&test_config(), &test_panel()));
    let row = rows
        .iter()
        .find(|r| r.contains("Checkerboard"))
        .expect("checkerboard row should render");
    assert!(row.contains("off"));

    let config = Config {
        is_checkerboard: true,
        ..test_config()
    };
    let rows = row_strings(&render_panel(&config, &test_panel()));
    let row = rows
        .iter()
        .find(|r| r.contains("Checkerboard"))
        .expect("checkerboard row should render");
    assert!(row.contains("on"));
    assert!(!row.contains("off"));
}

#[test]
fn test_focused_row_shows_adjust_arrows() {
    let buffer = render_panel(&test_config(), &test_panel());
    let rows = row_strings(&buffer);
    let row = rows
        .iter()
        .find(|r| r.contains("Rows"))
        .expect("rows row should render");

    assert!(row.contains("◂ 12 ▸"));
    assert!(row.contains("▎"));
}

#[test]
fn test_unfocused_rows_have_no_arrows() {
    let buffer = render_panel(&test_config(), &test_panel());
    let rows = row_strings(&buffer);
    let row = rows
        .iter()
        .find(|r| r.contains("Columns"))
        .expect("columns row should render");

    assert!(!row.contains("◂"));
}

#[test]
fn test_editing_shows_buffer_and_cursor() {
    let mut panel = test_panel();
    panel.focus = PanelControl::PrimaryColor;
    panel.edit = Some("#12ab".to_string());

    let content = content_of(&render_panel(&test_config(), &panel));
    assert!(content.contains("#12ab▌"));
    assert!(content.contains("apply"));
    assert!(content.contains("cancel"));
}

#[test]
fn test_normal_mode_hints() {
    let content = content_of(&render_panel(&test_config(), &test_panel()));

    assert!(content.contains("focus"));
    assert!(content.contains("adjust"));
    assert!(content.contains("edit"));
    assert!(content.contains("preset"));
}

#[test]
fn test_active_preset_digit_highlighted() {
    // Primary "#ffffff" matches preset 1 (White)
    let buffer = render_panel(&test_config(), &test_panel());

    let mut found = false;
    for y in 0..buffer.area().height {
        for x in 0..buffer.area().width {
            let cell = &buffer[(x, y)];
            if cell.symbol() == "1" && cell.bg == palette::ACCENT {
                found = true;
            }
        }
    }
    assert!(found, "active preset digit should use the accent background");
}

#[test]
fn test_custom_color_highlights_no_preset() {
    let config = Config {
        primary_color: "#123456".to_string(),
        ..test_config()
    };
    let buffer = render_panel(&config, &test_panel());

    for y in 0..buffer.area().height {
        for x in 0..buffer.area().width {
            let cell = &buffer[(x, y)];
            assert_ne!(
                cell.bg,
                palette::ACCENT,
                "no swatch should be active for a custom color"
            );
        }
    }
}

#[test]
fn test_panel_floats_over_frame() {
    let buffer = render_panel(&test_config(), &test_panel());

    // The panel is centered; the frame corner stays untouched
    assert_eq!(buffer[(0, 0)].symbol(), " ");
    assert_ne!(buffer[(30, 10)].symbol(), "");
}

#[test]
fn test_panel_casts_shadow() {
    // Checkerboard off: 7 content lines + borders = 9 rows in a 60x20
    // frame, so the panel rect is (7, 5, 46, 9) and the right-edge
    // shadow column sits at x=53.
    let buffer = render_panel(&test_config(), &test_panel());
    assert_eq!(buffer[(53, 6)].bg, palette::SHADOW);
}
