//! scrub-tui - Terminal UI for Screen Scrub
//!
//! This crate provides the ratatui-based terminal interface: the cleaning
//! surface rendered as a full-viewport grid of colored cells, event
//! polling (keys, pointer movement, ticks), and the main run loop wiring
//! events through scrub-app's update function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::{run, RunOptions};
