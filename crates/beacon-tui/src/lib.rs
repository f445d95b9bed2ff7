//! Full-screen TUI implementation for the Beacon campus portal.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use beacon_core::config::Config;
pub use features::{carousel, dashboard};
pub use runtime::TuiRuntime;

/// Runs the interactive portal.
pub fn run_portal(config: &Config) -> Result<()> {
    // The portal requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portal requires a terminal.\n\
             Use `beacon events` for non-interactive output."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Beacon Campus Portal")?;
    writeln!(err, "Theme: {}", config.theme.display_name())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
