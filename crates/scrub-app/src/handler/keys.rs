//! Key event handling
//!
//! Maps abstract input keys to messages based on the current state. An
//! in-progress hex edit captures keys first, so typing 'f' into a color
//! field never toggles fullscreen. Outside of editing, the single-key
//! shortcuts ('f', 'h', 'q') apply whether or not the panel is shown.

use scrub_core::{active_preset, PRESETS};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, PanelControl};

/// Convert a key event into a message, if it has any effect
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere, including mid-edit
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.panel.visible && state.panel.is_editing() {
        return handle_edit_key(key);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char(c) if c.eq_ignore_ascii_case(&'f') => Some(Message::ToggleFullscreen),
        InputKey::Char(c) if c.eq_ignore_ascii_case(&'h') => Some(Message::ToggleControls),
        InputKey::Esc if state.panel.visible => Some(Message::HideControls),
        key if state.panel.visible => handle_panel_key(state, key),
        _ => None,
    }
}

/// Keys routed to the panel while it is shown and no edit is in progress
fn handle_panel_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Down | InputKey::Tab => Some(Message::FocusNext),
        InputKey::Left => adjust_focused(state, -1),
        InputKey::Right => adjust_focused(state, 1),
        InputKey::Enter => activate_focused(state),
        InputKey::Char(c @ '1'..='8') if state.panel.focus.is_color() => {
            let idx = (c as usize) - ('1' as usize);
            Some(set_focused_color(state, PRESETS[idx].value.to_string()))
        }
        _ => None,
    }
}

/// Keys while a hex edit is in progress
fn handle_edit_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::CommitColorEdit),
        InputKey::Esc => Some(Message::CancelColorEdit),
        InputKey::Backspace => Some(Message::ColorEditBackspace),
        InputKey::Delete => Some(Message::ColorEditClear),
        InputKey::Char(c) if c == '#' || c.is_ascii_hexdigit() => {
            Some(Message::ColorEditInput(c))
        }
        _ => None,
    }
}

/// Left/Right on the focused control: step a dimension, flip the
/// checkerboard toggle, or cycle a color through the presets
fn adjust_focused(state: &AppState, delta: i32) -> Option<Message> {
    match state.panel.focus {
        PanelControl::Rows => Some(Message::SetRows(step(state.config.rows, delta))),
        PanelControl::Cols => Some(Message::SetCols(step(state.config.cols, delta))),
        PanelControl::Checkerboard => {
            Some(Message::SetCheckerboard(!state.config.is_checkerboard))
        }
        PanelControl::PrimaryColor => Some(set_focused_color(
            state,
            cycle_preset(&state.config.primary_color, delta),
        )),
        PanelControl::SecondaryColor => Some(set_focused_color(
            state,
            cycle_preset(&state.config.secondary_color, delta),
        )),
    }
}

/// Enter on the focused control: flip the toggle or start a hex edit
fn activate_focused(state: &AppState) -> Option<Message> {
    match state.panel.focus {
        PanelControl::Checkerboard => {
            Some(Message::SetCheckerboard(!state.config.is_checkerboard))
        }
        PanelControl::PrimaryColor | PanelControl::SecondaryColor => {
            Some(Message::StartColorEdit)
        }
        _ => None,
    }
}

fn step(value: u16, delta: i32) -> u16 {
    if delta < 0 {
        value.saturating_sub(1)
    } else {
        value.saturating_add(1)
    }
}

/// Next or previous preset relative to the current color. A color that
/// matches no preset starts the cycle at the first preset.
fn cycle_preset(current: &str, delta: i32) -> String {
    let len = PRESETS.len();
    let next = match active_preset(current) {
        Some(idx) if delta < 0 => (idx + len - 1) % len,
        Some(idx) => (idx + 1) % len,
        None => 0,
    };
    PRESETS[next].value.to_string()
}

fn set_focused_color(state: &AppState, value: String) -> Message {
    match state.panel.focus {
        PanelControl::SecondaryColor => Message::SetSecondaryColor(value),
        _ => Message::SetPrimaryColor(value),
    }
}
