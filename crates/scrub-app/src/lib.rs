//! scrub-app - Application state and orchestration for Screen Scrub
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `AppState` is the model, `Message` the events, and
//! `handler::update` the transition function. It also owns the persistent
//! state slot and the ambient settings file.

pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod settings;
pub mod state;
pub mod store;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use settings::Settings;
pub use state::{AppPhase, AppState, CursorState, PanelControl, PanelState};
