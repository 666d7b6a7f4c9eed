//! Screen Scrub - A terminal screen cleaner
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use scrub_core::prelude::*;
use scrub_tui::RunOptions;

/// Screen Scrub - wash your terminal with a full-screen color grid
#[derive(Parser, Debug)]
#[command(name = "scrub")]
#[command(about = "A terminal screen cleaner", long_about = None)]
struct Args {
    /// Directory holding the saved grid configuration
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Start from the default configuration, ignoring saved state
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns the terminal)
    scrub_core::logging::init()?;

    let result = scrub_tui::run(RunOptions {
        state_dir: args.state_dir,
        reset: args.reset,
    });

    info!("Screen Scrub exiting");
    result
}
