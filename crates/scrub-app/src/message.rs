//! Messages for the TEA update loop.
//!
//! Every state transition in the application is expressed as a `Message`
//! and funneled through `handler::update`. Input events (keys, pointer
//! movement, ticks) arrive as messages, and key handling may emit further
//! messages that the process loop feeds back in.

use crate::input_key::InputKey;

/// Messages that drive state transitions (TEA pattern)
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard input (converted from terminal events at the TUI boundary)
    Key(InputKey),

    /// Pointer moved to a new terminal cell
    MouseMoved { column: u16, row: u16 },

    /// Periodic tick (drives the cursor idle check)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Grid configuration
    // ─────────────────────────────────────────────────────────
    /// Set the grid row count (clamped to the valid range)
    SetRows(u16),

    /// Set the grid column count (clamped to the valid range)
    SetCols(u16),

    /// Set the primary cell color to a hex value
    SetPrimaryColor(String),

    /// Set the secondary cell color to a hex value
    SetSecondaryColor(String),

    /// Enable or disable the checkerboard pattern
    SetCheckerboard(bool),

    // ─────────────────────────────────────────────────────────
    // Controls panel
    // ─────────────────────────────────────────────────────────
    /// Toggle the controls panel between shown and hidden
    ToggleControls,

    /// Hide the controls panel
    HideControls,

    /// Move panel focus to the next control
    FocusNext,

    /// Move panel focus to the previous control
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Color editing
    // ─────────────────────────────────────────────────────────
    /// Begin free-form hex entry for the focused color control
    StartColorEdit,

    /// Append a character to the hex edit buffer
    ColorEditInput(char),

    /// Remove the last character from the hex edit buffer
    ColorEditBackspace,

    /// Clear the hex edit buffer
    ColorEditClear,

    /// Validate the hex edit buffer and apply it to the focused control
    CommitColorEdit,

    /// Abandon the hex edit without applying it
    CancelColorEdit,

    // ─────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────
    /// Toggle the terminal fullscreen request
    ToggleFullscreen,

    /// A fullscreen request was not accepted by the terminal; rolls the
    /// tracked flag back so the next toggle re-issues the same request
    FullscreenFailed { requested: bool },
}
