//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Main entry point, terminal setup and teardown
//! - `run_loop`: Main event loop processing terminal events

use std::path::{Path, PathBuf};
use std::time::Duration;

use scrub_app::{process_message, settings, store, AppState, Message, Settings, UpdateAction};
use scrub_core::prelude::*;
use scrub_core::Config;

use super::{event, render, terminal};

/// Options for the TUI runner, resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Override for the directory holding the state slot
    pub state_dir: Option<PathBuf>,
    /// Discard the persisted configuration and start from defaults
    pub reset: bool,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let settings = startup_settings(&settings::default_config_dir());
    info!(
        "Loaded settings: tick_ms={} dwell_secs={}",
        settings.ui.tick_ms, settings.cursor.dwell_secs
    );

    let state_path = match options.state_dir {
        Some(dir) => store::state_path(&dir),
        None => store::default_state_path(),
    };
    let config = initial_config(options.reset, &state_path);
    let mut state = AppState::with_config(config, settings, state_path);

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse capture unavailable: {}", e);
    }

    let result = run_loop(&mut term, &mut state);

    // Leave fullscreen before handing the terminal back
    if state.fullscreen {
        if let Err(e) = terminal::set_fullscreen(false) {
            warn!("Failed to leave fullscreen: {}", e);
        }
    }
    terminal::release_terminal();

    result
}

/// Resolve the starting configuration from the state slot
fn initial_config(reset: bool, state_path: &Path) -> Config {
    if reset {
        info!("Reset requested, ignoring saved state");
        return Config::default();
    }
    store::load_state(state_path)
}

/// Seed the settings directory, then load settings from it.
///
/// A fresh install gets the default settings.toml written first. Init
/// failure is non-fatal; loading falls back to defaults on its own.
fn startup_settings(config_dir: &Path) -> Settings {
    if let Err(e) = settings::init_settings(config_dir) {
        warn!("Failed to initialize settings dir: {}", e);
    }
    settings::load_settings(config_dir)
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    let tick = Duration::from_millis(state.settings.ui.tick_ms);

    while !state.should_quit() {
        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events; a poll timeout yields a tick so the
        // idle cursor check runs without input.
        if let Some(message) = event::poll(tick)? {
            let mut pending = vec![message];
            while let Some(next) = pending.pop() {
                for action in process_message(state, next) {
                    // A failed side effect reports back through the pump.
                    if let Some(report) = handle_action(action) {
                        pending.push(report);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Perform a side effect requested by the update function.
///
/// Returns a message when the outcome has to reach the state machine.
fn handle_action(action: UpdateAction) -> Option<Message> {
    match action {
        UpdateAction::SetFullscreen(enabled) => {
            if let Err(e) = terminal::set_fullscreen(enabled) {
                // Not every terminal honors window ops; keep running windowed.
                warn!("Fullscreen request failed: {}", e);
                return Some(Message::FullscreenFailed { requested: enabled });
            }
            None
        }
    }
}
