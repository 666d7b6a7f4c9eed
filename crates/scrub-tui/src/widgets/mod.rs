//! Custom widget components

mod controls_panel;
mod grid;
mod hint_bar;
pub mod overlay;

pub use controls_panel::ControlsPanel;
pub use grid::{grid_cell_at, WashGrid};
pub use hint_bar::HintBar;
