//! Main update function - handles state transitions (TEA pattern)
//!
//! Configuration changes persist to the state slot inside the transition
//! itself, so the slot is written before the next draw can observe the
//! new state.

use std::time::Instant;

use scrub_core::{clamp_dimension, is_valid_hex};
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppState, PanelControl};
use crate::store;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::MouseMoved { column, row } => {
            let dwell = state.cursor_dwell();
            state.cursor.touch(Instant::now(), column, row, dwell);
            UpdateResult::none()
        }

        Message::Tick => {
            if state.cursor.advance(Instant::now()) {
                debug!(
                    "Cursor hidden after {}s idle",
                    state.settings.cursor.dwell_secs
                );
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Grid configuration
        // ─────────────────────────────────────────────────────────
        Message::SetRows(rows) => {
            state.config.rows = clamp_dimension(rows);
            persist(state);
            UpdateResult::none()
        }

        Message::SetCols(cols) => {
            state.config.cols = clamp_dimension(cols);
            persist(state);
            UpdateResult::none()
        }

        Message::SetPrimaryColor(value) => set_color(state, value, false),
        Message::SetSecondaryColor(value) => set_color(state, value, true),

        Message::SetCheckerboard(on) => {
            state.config.is_checkerboard = on;
            // The secondary control leaves the panel with the pattern off.
            if !on && state.panel.focus == PanelControl::SecondaryColor {
                state.panel.focus = PanelControl::Checkerboard;
            }
            persist(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Controls panel
        // ─────────────────────────────────────────────────────────
        Message::ToggleControls => {
            state.toggle_panel();
            UpdateResult::none()
        }

        Message::HideControls => {
            state.hide_panel();
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.panel.focus_next(state.config.is_checkerboard);
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.panel.focus_prev(state.config.is_checkerboard);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Color editing
        // ─────────────────────────────────────────────────────────
        Message::StartColorEdit => {
            state.panel.edit = Some(focused_color(state).to_string());
            UpdateResult::none()
        }

        Message::ColorEditInput(c) => {
            if let Some(buffer) = state.panel.edit.as_mut() {
                // "#" plus six hex digits is the longest valid value.
                if buffer.len() < 7 {
                    buffer.push(c);
                }
            }
            UpdateResult::none()
        }

        Message::ColorEditBackspace => {
            if let Some(buffer) = state.panel.edit.as_mut() {
                buffer.pop();
            }
            UpdateResult::none()
        }

        Message::ColorEditClear => {
            if let Some(buffer) = state.panel.edit.as_mut() {
                buffer.clear();
            }
            UpdateResult::none()
        }

        Message::CommitColorEdit => {
            let buffer = match state.panel.edit.take() {
                Some(buffer) => buffer,
                None => return UpdateResult::none(),
            };

            if !is_valid_hex(&buffer) {
                warn!("Rejected invalid color {:?}", buffer);
                return UpdateResult::none();
            }

            match state.panel.focus {
                PanelControl::SecondaryColor => {
                    UpdateResult::message(Message::SetSecondaryColor(buffer))
                }
                _ => UpdateResult::message(Message::SetPrimaryColor(buffer)),
            }
        }

        Message::CancelColorEdit => {
            state.panel.edit = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Display
        // ─────────────────────────────────────────────────────────
        Message::ToggleFullscreen => {
            state.fullscreen = !state.fullscreen;
            UpdateResult::action(UpdateAction::SetFullscreen(state.fullscreen))
        }

        Message::FullscreenFailed { requested } => {
            // The flag must not claim a mode the terminal never entered.
            state.fullscreen = !requested;
            UpdateResult::none()
        }
    }
}

/// Validate and apply a color change. Invalid values are rejected and
/// logged; the previous color stays in place.
fn set_color(state: &mut AppState, value: String, secondary: bool) -> UpdateResult {
    if !is_valid_hex(&value) {
        warn!("Rejected invalid color {:?}", value);
        return UpdateResult::none();
    }

    if secondary {
        state.config.secondary_color = value;
    } else {
        state.config.primary_color = value;
    }
    persist(state);
    UpdateResult::none()
}

/// Write the configuration to the state slot. A failed write keeps the
/// in-memory change and is logged.
fn persist(state: &AppState) {
    if let Err(e) = store::save_state(&state.state_path, &state.config) {
        warn!("Failed to persist state: {}", e);
    }
}

fn focused_color(state: &AppState) -> &str {
    match state.panel.focus {
        PanelControl::SecondaryColor => &state.config.secondary_color,
        _ => &state.config.primary_color,
    }
}
