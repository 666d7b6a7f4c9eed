//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use scrub_app::AppState;
use scrub_core::cell_color;

use crate::theme::contrast_color;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Draw order settles the overlap rules: grid first, hint bar over its
/// bottom row, controls panel over the middle, cursor marker last so
/// it stays visible on top of the panel.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area);

    frame.render_widget(widgets::WashGrid::new(&state.config), areas.grid);
    frame.render_widget(widgets::HintBar::new(state.panel.visible), areas.hint_bar);

    if state.panel.visible {
        frame.render_widget(
            widgets::ControlsPanel::new(&state.config, &state.panel),
            area,
        );
    }

    if state.cursor.visible {
        render_cursor_marker(frame, state, areas.grid);
    }
}

/// Draw the pointer marker at the last reported cell.
///
/// The marker is a foreground glyph in black or white, chosen against
/// the wash color of the grid cell underneath, with the background left
/// untouched.
fn render_cursor_marker(frame: &mut Frame, state: &AppState, grid_area: Rect) {
    let (column, row) = match state.cursor.position {
        Some(position) => position,
        None => return,
    };

    let fg = match widgets::grid_cell_at(&state.config, grid_area, column, row) {
        Some((r, c)) => contrast_color(cell_color(&state.config, r, c)),
        None => return,
    };

    if let Some(cell) = frame.buffer_mut().cell_mut((column, row)) {
        cell.set_char('+');
        cell.set_style(Style::default().fg(fg));
    }
}
