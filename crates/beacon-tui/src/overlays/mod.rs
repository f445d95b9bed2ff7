//! Modal overlays for the TUI.
//!
//! Overlays temporarily take over keyboard input. Each overlay is
//! self-contained: it owns its state, key handler, and render function,
//! and reports a transition plus effects back to the reducer.

pub mod login;
mod render_utils;

use beacon_core::session::Session;
use crossterm::event::KeyEvent;
pub use login::LoginState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::theme::Theme;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    /// Login succeeded; the reducer switches to the session's dashboard.
    Complete(Session),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            effects: Vec::new(),
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

/// The active modal overlay.
#[derive(Debug)]
pub enum Overlay {
    Login(LoginState),
}

impl Overlay {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(login) => login.handle_key(key),
        }
    }

    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Login(login) => login.render(theme, frame, area),
        }
    }
}
