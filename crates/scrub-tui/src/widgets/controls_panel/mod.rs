//! Controls panel widget - floating configuration overlay
//!
//! One focusable row per wash setting. The panel floats centered over
//! the live grid, so every change is visible behind it immediately.
//! The secondary color row appears only while the checkerboard pattern
//! is on, matching the focus order in the app layer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use scrub_app::{PanelControl, PanelState};
use scrub_core::{active_preset, Config, PRESETS};

use crate::theme::{styles, terminal_color};
use crate::widgets::overlay::{centered_rect, clear_area, render_shadow};

/// Outer panel width, borders included
const PANEL_WIDTH: u16 = 46;

/// Label column width; values start right after it
const LABEL_WIDTH: usize = 16;

pub struct ControlsPanel<'a> {
    config: &'a Config,
    panel: &'a PanelState,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(config: &'a Config, panel: &'a PanelState) -> Self {
        Self { config, panel }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        for control in PanelControl::order(self.config.is_checkerboard) {
            let focused = *control == self.panel.focus;
            match control {
                PanelControl::Rows => {
                    lines.push(self.dimension_line(*control, self.config.rows, focused));
                }
                PanelControl::Cols => {
                    lines.push(self.dimension_line(*control, self.config.cols, focused));
                }
                PanelControl::PrimaryColor => {
                    lines.push(self.color_line(*control, &self.config.primary_color, focused));
                    lines.push(preset_line(&self.config.primary_color));
                }
                PanelControl::Checkerboard => {
                    lines.push(self.toggle_line(*control, self.config.is_checkerboard, focused));
                }
                PanelControl::SecondaryColor => {
                    lines.push(self.color_line(*control, &self.config.secondary_color, focused));
                    lines.push(preset_line(&self.config.secondary_color));
                }
            }
        }

        lines.push(Line::default());
        lines.push(self.hint_line());
        lines
    }

    fn dimension_line(&self, control: PanelControl, value: u16, focused: bool) -> Line<'a> {
        let mut spans = vec![focus_marker(focused), label_span(control, focused)];
        push_adjustable(
            &mut spans,
            Span::styled(value.to_string(), styles::text_primary()),
            focused,
        );
        Line::from(spans)
    }

    fn color_line(&self, control: PanelControl, value: &'a str, focused: bool) -> Line<'a> {
        let mut spans = vec![focus_marker(focused), label_span(control, focused)];

        if focused && self.panel.is_editing() {
            let buffer = self.panel.edit.as_deref().unwrap_or("");
            spans.push(Span::styled(
                format!("{}▌", buffer),
                styles::editing_value(),
            ));
            return Line::from(spans);
        }

        spans.push(Span::styled(
            "■ ",
            Style::default().fg(terminal_color(value)),
        ));
        push_adjustable(
            &mut spans,
            Span::styled(value, styles::text_primary()),
            focused,
        );
        Line::from(spans)
    }

    fn toggle_line(&self, control: PanelControl, value: bool, focused: bool) -> Line<'a> {
        let mut spans = vec![focus_marker(focused), label_span(control, focused)];
        let value_span = if value {
            Span::styled("on", styles::status_green())
        } else {
            Span::styled("off", styles::status_red())
        };
        push_adjustable(&mut spans, value_span, focused);
        Line::from(spans)
    }

    fn hint_line(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = if self.panel.is_editing() {
            &[("⏎", "apply"), ("esc", "cancel"), ("⌫", "erase")]
        } else {
            &[
                ("↑↓", "focus"),
                ("←→", "adjust"),
                ("⏎", "edit"),
                ("1-8", "preset"),
            ]
        };

        let separator = Span::styled(" · ", styles::text_muted());
        let mut spans = vec![Span::raw("  ")];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.push(Span::styled(*key, styles::text_secondary()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*label, styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.build_lines();
        let height = lines.len() as u16 + 2;
        let rect = centered_rect(PANEL_WIDTH, height, area);

        clear_area(buf, rect);
        render_shadow(buf, rect);
        Paragraph::new(lines)
            .block(styles::panel_block(" Controls "))
            .render(rect, buf);
    }
}

/// Left accent bar marking the focused row
fn focus_marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("▎ ", styles::accent_bold())
    } else {
        Span::raw("  ")
    }
}

fn label_span(control: PanelControl, focused: bool) -> Span<'static> {
    let style = if focused {
        styles::text_primary().add_modifier(Modifier::BOLD)
    } else {
        styles::text_secondary()
    };
    Span::styled(format!("{:<width$}", control.label(), width = LABEL_WIDTH), style)
}

/// Wrap a value in `◂ ▸` arrows while its row has focus
fn push_adjustable<'a>(spans: &mut Vec<Span<'a>>, value: Span<'a>, focused: bool) {
    if focused {
        spans.push(Span::styled("◂ ", styles::accent_bold()));
        spans.push(value);
        spans.push(Span::styled(" ▸", styles::accent_bold()));
    } else {
        spans.push(value);
    }
}

/// The digit-selectable preset swatches, active one highlighted
fn preset_line(color: &str) -> Line<'static> {
    let active = active_preset(color);
    let mut spans = vec![Span::raw(format!("{:width$}", "", width = LABEL_WIDTH + 2))];

    for (idx, preset) in PRESETS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let digit_style = if active == Some(idx) {
            styles::active_swatch()
        } else {
            styles::text_muted()
        };
        spans.push(Span::styled((idx + 1).to_string(), digit_style));
        spans.push(Span::styled(
            "■",
            Style::default().fg(terminal_color(preset.value)),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests;
