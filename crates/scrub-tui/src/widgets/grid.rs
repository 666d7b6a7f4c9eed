//! Full-viewport wash grid widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use scrub_core::{cell_color, Config};

use crate::theme::terminal_color;

/// The wash surface: every terminal cell painted from the grid pattern.
///
/// Terminal cells map onto grid cells proportionally, so the configured
/// rows x cols always stretch across the whole area regardless of its
/// size. A grid larger than the viewport collapses neighbouring cells
/// onto the same terminal cell.
pub struct WashGrid<'a> {
    config: &'a Config,
}

impl<'a> WashGrid<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl Widget for WashGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (row, col) = grid_position(self.config, area, x, y);
                let color = terminal_color(cell_color(self.config, row, col));
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ');
                    cell.set_style(Style::default().bg(color));
                }
            }
        }
    }
}

/// Grid cell under the terminal cell `(x, y)`, or `None` outside `area`.
///
/// Returns zero-based `(row, col)`. The cursor marker uses this to pick
/// a contrasting foreground for whatever cell it lands on.
pub fn grid_cell_at(config: &Config, area: Rect, x: u16, y: u16) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
        return None;
    }
    Some(grid_position(config, area, x, y))
}

/// Proportional terminal-to-grid mapping. Callers guarantee `(x, y)`
/// lies inside the non-empty `area`.
fn grid_position(config: &Config, area: Rect, x: u16, y: u16) -> (u16, u16) {
    let row = (u32::from(y - area.y) * u32::from(config.rows) / u32::from(area.height)) as u16;
    let col = (u32::from(x - area.x) * u32::from(config.cols) / u32::from(area.width)) as u16;
    (row, col)
}
