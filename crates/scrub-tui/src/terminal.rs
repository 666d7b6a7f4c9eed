//! Terminal setup, restoration, and window control

use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{Command, ExecutableCommand, QueueableCommand};

use scrub_core::prelude::*;

/// Install a panic hook that restores the terminal
///
/// Mouse capture is released before the ratatui restore so a panic
/// never leaves the terminal swallowing mouse input.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = io::stdout().execute(DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start reporting mouse movement events
///
/// Required for the idle cursor timer: without capture the terminal
/// never delivers `Event::Mouse` and the marker would hide forever.
pub fn enable_mouse_capture() -> Result<()> {
    io::stdout()
        .execute(EnableMouseCapture)
        .map_err(|e| Error::terminal(e.to_string()))?;
    Ok(())
}

/// Release mouse capture and restore the terminal
///
/// Errors are swallowed: this runs on every exit path, including after
/// failures where stdout may already be unusable.
pub fn release_terminal() {
    let _ = io::stdout().execute(DisableMouseCapture);
    ratatui::restore();
}

/// Request that the terminal window enter or leave fullscreen
///
/// Uses the xterm window manipulation sequence (CSI 10;1t / 10;0t).
/// Terminals that do not implement window ops ignore the bytes, so the
/// only observable failures are write errors.
pub fn set_fullscreen(enabled: bool) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .queue(SetWindowFullscreen(enabled))
        .map_err(|e| Error::fullscreen(e.to_string()))?;
    stdout
        .flush()
        .map_err(|e| Error::fullscreen(e.to_string()))?;
    Ok(())
}

/// Crossterm command emitting the xterm fullscreen window op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetWindowFullscreen(pub bool);

impl Command for SetWindowFullscreen {
    fn write_ansi(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        if self.0 {
            write!(f, "\x1b[10;1t")
        } else {
            write!(f, "\x1b[10;0t")
        }
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "window manipulation requires ANSI support",
        ))
    }
}
