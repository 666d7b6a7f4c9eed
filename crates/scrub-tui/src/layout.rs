//! Screen layout definitions for the TUI
//!
//! The wash grid must cover every cell of the viewport, so the layout
//! never splits the screen. The hint bar is an overlay rect drawn on
//! top of the grid's bottom row.

use ratatui::layout::Rect;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Wash grid area (always the full viewport)
    pub grid: Rect,

    /// Hint bar overlay (bottom row of the viewport)
    pub hint_bar: Rect,
}

/// Compute the screen areas for a frame
///
/// `grid` is the frame area unchanged. `hint_bar` is the bottom row,
/// or an empty rect when the frame has no rows to give.
pub fn create(area: Rect) -> ScreenAreas {
    let hint_bar = if area.height == 0 {
        Rect::new(area.x, area.y, area.width, 0)
    } else {
        Rect::new(area.x, area.y + area.height - 1, area.width, 1)
    };

    ScreenAreas {
        grid: area,
        hint_bar,
    }
}
