//! Shared overlay utilities.
//!
//! The controls panel floats over the live wash grid, so it needs the
//! usual overlay plumbing: centering, clearing the cells underneath,
//! and a drop shadow for elevation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use scrub_tui::widgets::overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let panel = centered_rect(40, 10, area);
/// assert_eq!(panel, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Render a 1-cell shadow offset to the right and bottom of a rect.
///
/// Creates the illusion of elevation by drawing darker cells along the
/// right edge and bottom edge, offset by 1 cell.
pub fn render_shadow(buf: &mut Buffer, panel_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    // Right edge shadow (1 cell wide, full height)
    let right_x = panel_rect.x.saturating_add(panel_rect.width);
    for y in panel_rect.y.saturating_add(1)
        ..panel_rect
            .y
            .saturating_add(panel_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge shadow (full width, 1 cell tall)
    let bottom_y = panel_rect.y.saturating_add(panel_rect.height);
    for x in panel_rect.x.saturating_add(1)
        ..panel_rect
            .x
            .saturating_add(panel_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect so overlay content starts from blank cells.
///
/// Without this the grid's cell backgrounds bleed through any overlay
/// cell the panel leaves untouched.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
