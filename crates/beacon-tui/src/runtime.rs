//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! The loop is synchronous. It blocks on terminal input up to the tick
//! cadence, drains any buffered events, feeds each one through the reducer
//! in arrival order, and repaints only when the state marked itself dirty.

use std::io::Stdout;

use anyhow::{Context, Result};
use beacon_core::config::Config;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, ToastKind};
use crate::{render, terminal, update};

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    tick_interval: std::time::Duration,
    last_tick: std::time::Instant,
    should_quit: bool,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, entering the alternate screen.
    pub fn new(config: Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let tick_interval = config.tick_rate();
        let state = AppState::new(config)?;

        Ok(Self {
            terminal,
            state,
            tick_interval,
            last_tick: std::time::Instant::now(),
            should_quit: false,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // Mouse capture stays enabled for exactly as long as the loop runs
        terminal::enable_input_features()?;

        let result = self.event_loop();

        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            for event in self.collect_events()? {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if self.state.dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.state.dirty = false;
            }
        }

        Ok(())
    }

    /// Blocks until input arrives or the next tick is due, then returns the
    /// batch of events to reduce.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let poll_duration = self.tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events without blocking
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= self.tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.should_quit = true;
            }
            UiEffect::OpenRegistration { url } => {
                if !self.state.config.open_links {
                    self.state.show_toast(ToastKind::Info, format!("Register at {url}"));
                    return;
                }
                if let Err(e) = open::that(&url) {
                    tracing::warn!(url, error = %e, "failed to open registration page");
                    self.state
                        .show_toast(ToastKind::Error, "Could not open the browser");
                }
            }
            UiEffect::PersistTheme { theme } => {
                if let Err(e) = Config::save_theme(theme) {
                    tracing::warn!(error = %e, "failed to persist theme");
                    self.state
                        .show_toast(ToastKind::Error, "Could not save theme preference");
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::disable_input_features();
        let _ = terminal::restore_terminal();
    }
}
