//! Bottom-row keybinding hints
//!
//! Drawn over the grid's bottom row with foreground-only styles, so the
//! wash color shows through behind the text. Faded while the controls
//! panel is hidden, bright while it is open.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct HintBar {
    panel_visible: bool,
}

impl HintBar {
    pub fn new(panel_visible: bool) -> Self {
        Self { panel_visible }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let (key_style, label_style) = if self.panel_visible {
            (styles::hint_key(), styles::text_secondary())
        } else {
            (styles::text_muted(), styles::text_muted())
        };
        let separator = Span::styled(" · ", styles::text_muted());

        let controls_label = if self.panel_visible {
            "hide controls"
        } else {
            "controls"
        };
        let hints = [("f", "fullscreen"), ("h", controls_label), ("q", "quit")];

        let mut segments = vec![Span::raw(" ")];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                segments.push(separator.clone());
            }
            segments.push(Span::styled(*key, key_style));
            segments.push(Span::raw(" "));
            segments.push(Span::styled(*label, label_style));
        }

        segments
    }
}

impl Widget for HintBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = Line::from(self.build_segments());
        Paragraph::new(line).render(area, buf);
    }
}
