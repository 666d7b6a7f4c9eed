//! Application state (Model in the TEA pattern)
//!
//! `AppState` owns everything the renderer reads: the persisted grid
//! configuration, the controls panel state machine, the pointer cursor
//! state machine, and the fullscreen flag. All mutation goes through
//! `handler::update`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use scrub_core::Config;

use crate::settings::Settings;
use crate::store;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Normal operation
    #[default]
    Running,
    /// Shutting down
    Quitting,
}

/// A focusable control in the controls panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelControl {
    /// Grid row count
    #[default]
    Rows,
    /// Grid column count
    Cols,
    /// Primary cell color
    PrimaryColor,
    /// Checkerboard pattern toggle
    Checkerboard,
    /// Secondary cell color (present only while checkerboard is on)
    SecondaryColor,
}

impl PanelControl {
    /// Controls in display order. The secondary color control is part of
    /// the panel only while the checkerboard pattern is enabled.
    pub fn order(checkerboard: bool) -> &'static [PanelControl] {
        use PanelControl::*;
        const FULL: &[PanelControl] = &[Rows, Cols, PrimaryColor, Checkerboard, SecondaryColor];
        const BASE: &[PanelControl] = &[Rows, Cols, PrimaryColor, Checkerboard];
        if checkerboard {
            FULL
        } else {
            BASE
        }
    }

    /// Whether this control holds a color value
    pub fn is_color(self) -> bool {
        matches!(
            self,
            PanelControl::PrimaryColor | PanelControl::SecondaryColor
        )
    }

    /// Display label for the panel
    pub fn label(self) -> &'static str {
        match self {
            PanelControl::Rows => "Rows",
            PanelControl::Cols => "Columns",
            PanelControl::PrimaryColor => "Primary color",
            PanelControl::Checkerboard => "Checkerboard",
            PanelControl::SecondaryColor => "Secondary color",
        }
    }
}

/// Controls panel state machine: shown or hidden, with a focused control
/// and an optional in-progress hex edit.
#[derive(Debug, Clone)]
pub struct PanelState {
    /// Whether the panel is currently shown
    pub visible: bool,
    /// The focused control
    pub focus: PanelControl,
    /// Hex edit buffer, `Some` while an edit is in progress
    pub edit: Option<String>,
}

impl PanelState {
    fn new(visible: bool) -> Self {
        Self {
            visible,
            focus: PanelControl::default(),
            edit: None,
        }
    }

    /// Whether a hex edit is in progress
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Move focus to the next control in display order, wrapping
    pub fn focus_next(&mut self, checkerboard: bool) {
        let order = PanelControl::order(checkerboard);
        let idx = order.iter().position(|c| *c == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    /// Move focus to the previous control in display order, wrapping
    pub fn focus_prev(&mut self, checkerboard: bool) {
        let order = PanelControl::order(checkerboard);
        let idx = order.iter().position(|c| *c == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }
}

/// Pointer cursor state machine: visible or hidden, with a single pending
/// hide deadline. Movement replaces the deadline, so only the most recent
/// movement can hide the cursor.
#[derive(Debug, Clone)]
pub struct CursorState {
    /// Whether the cursor marker is drawn
    pub visible: bool,
    /// Last reported pointer cell, `None` before any movement
    pub position: Option<(u16, u16)>,
    hide_at: Option<Instant>,
}

impl CursorState {
    fn new() -> Self {
        Self {
            visible: true,
            position: None,
            hide_at: None,
        }
    }

    /// Record pointer movement: the cursor becomes visible and the hide
    /// deadline restarts from `now`.
    pub fn touch(&mut self, now: Instant, column: u16, row: u16, dwell: Duration) {
        self.visible = true;
        self.position = Some((column, row));
        self.hide_at = Some(now + dwell);
    }

    /// Advance the idle check. Returns true when the cursor transitions
    /// from visible to hidden on this call; the deadline is disarmed so
    /// the transition fires once per movement.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                let was_visible = self.visible;
                self.visible = false;
                was_visible
            }
            _ => false,
        }
    }
}

/// Central application state (Model in the TEA pattern)
#[derive(Debug, Clone)]
pub struct AppState {
    /// The grid configuration, persisted to the state slot on every change
    pub config: Config,

    /// Ambient application settings loaded at startup
    pub settings: Settings,

    /// Path of the persistent state slot
    pub state_path: PathBuf,

    /// Controls panel state
    pub panel: PanelState,

    /// Pointer cursor state
    pub cursor: CursorState,

    /// Whether the terminal fullscreen request is active
    pub fullscreen: bool,

    /// Current lifecycle phase
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state with default configuration and settings.
    ///
    /// The state slot points at the default location; callers that loaded
    /// a configuration from disk should use [`AppState::with_config`].
    pub fn new() -> Self {
        Self::with_config(
            Config::default(),
            Settings::default(),
            store::default_state_path(),
        )
    }

    /// Create state from a loaded configuration and settings
    pub fn with_config(config: Config, settings: Settings, state_path: PathBuf) -> Self {
        let panel = PanelState::new(settings.ui.panel_visible_on_start);
        Self {
            config,
            settings,
            state_path,
            panel,
            cursor: CursorState::new(),
            fullscreen: false,
            phase: AppPhase::Running,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Controls panel
    // ─────────────────────────────────────────────────────────

    /// Toggle the controls panel between shown and hidden. Hiding the
    /// panel abandons any in-progress hex edit.
    pub fn toggle_panel(&mut self) {
        self.panel.visible = !self.panel.visible;
        if !self.panel.visible {
            self.panel.edit = None;
        }
    }

    /// Hide the controls panel, abandoning any in-progress hex edit
    pub fn hide_panel(&mut self) {
        self.panel.visible = false;
        self.panel.edit = None;
    }

    // ─────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────

    /// How long the pointer may rest before the cursor marker hides
    pub fn cursor_dwell(&self) -> Duration {
        Duration::from_secs(self.settings.cursor.dwell_secs)
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Request immediate shutdown
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Whether the application should exit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
