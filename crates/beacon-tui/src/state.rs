//! Application state composition.
//!
//! Top-level state hierarchy for the portal TUI:
//!
//! ```text
//! AppState
//! ├── screen: Screen            (Landing or Dashboard)
//! │   ├── LandingState          (carousel, role cards, hit rects)
//! │   └── DashboardState        (session, menu selection)
//! ├── overlay: Option<Overlay>  (login form)
//! ├── theme: Theme
//! └── toast: Option<Toast>
//! ```
//!
//! State is split between the active screen and `Option<Overlay>` so the
//! overlay handler can take `&mut self` and `&mut Screen` without borrow
//! conflicts.

use std::cell::Cell;

use anyhow::Result;
use beacon_core::catalog::EVENTS;
use beacon_core::config::Config;
use beacon_core::session::{Role, Session};
use ratatui::layout::Rect;

use crate::features::carousel::CarouselState;
pub use crate::features::dashboard::DashboardState;
use crate::overlays::Overlay;
use crate::theme::Theme;

/// How many ticks a toast stays visible (3 seconds at the default cadence).
pub const TOAST_TICKS: u32 = 30;

/// A transient notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub remaining_ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            remaining_ticks: TOAST_TICKS,
        }
    }
}

/// State for the landing screen: hero, carousel, role cards, societies.
#[derive(Debug)]
pub struct LandingState {
    pub carousel: CarouselState,
    /// Index into [`Role::all`] for the highlighted role card.
    pub selected_role: usize,
    /// Carousel panel area; wheel events outside it are ignored.
    pub surface: Cell<Rect>,
    /// Indicator strip, one fixed-width slot per event.
    pub indicators: Cell<Rect>,
    pub register: Cell<Rect>,
    pub prev_arrow: Cell<Rect>,
    pub next_arrow: Cell<Rect>,
    /// One rect per role card, in [`Role::all`] order.
    pub role_cards: [Cell<Rect>; 3],
}

impl LandingState {
    pub fn new() -> Result<Self> {
        Ok(Self {
            carousel: CarouselState::new(EVENTS)?,
            selected_role: 0,
            surface: Cell::new(Rect::default()),
            indicators: Cell::new(Rect::default()),
            register: Cell::new(Rect::default()),
            prev_arrow: Cell::new(Rect::default()),
            next_arrow: Cell::new(Rect::default()),
            role_cards: [
                Cell::new(Rect::default()),
                Cell::new(Rect::default()),
                Cell::new(Rect::default()),
            ],
        })
    }

    pub fn selected_role(&self) -> Role {
        Role::all()[self.selected_role]
    }

    /// Cycles the highlighted role card forward.
    pub fn next_role(&mut self) {
        self.selected_role = (self.selected_role + 1) % Role::all().len();
    }

    /// Cycles the highlighted role card backward.
    pub fn previous_role(&mut self) {
        let len = Role::all().len();
        self.selected_role = (self.selected_role + len - 1) % len;
    }

    /// Resolves a click to a role card index.
    pub fn role_card_hit(&self, column: u16, row: u16) -> Option<usize> {
        self.role_cards
            .iter()
            .position(|card| card.get().contains((column, row).into()))
    }
}

/// The active top-level screen.
#[derive(Debug)]
pub enum Screen {
    Landing(LandingState),
    Dashboard(DashboardState),
}

impl Screen {
    pub fn is_landing(&self) -> bool {
        matches!(self, Screen::Landing(_))
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub screen: Screen,
    pub overlay: Option<Overlay>,
    pub theme: Theme,
    pub toast: Option<Toast>,
    pub config: Config,
    /// Set by the reducer whenever a repaint is needed.
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let theme = Theme::from_choice(config.theme);
        Ok(Self {
            screen: Screen::Landing(LandingState::new()?),
            overlay: None,
            theme,
            toast: None,
            config,
            dirty: true,
        })
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
        self.dirty = true;
    }

    /// Signs the session in and switches to its dashboard.
    pub fn enter_dashboard(&mut self, session: Session) {
        self.screen = Screen::Dashboard(DashboardState::new(session));
        self.dirty = true;
    }

    /// Signs out and returns to a fresh landing screen.
    ///
    /// The carousel restarts at position 0; its catalog is non-empty by
    /// construction so this cannot fail after startup.
    pub fn logout(&mut self) {
        if let Ok(landing) = LandingState::new() {
            self.screen = Screen::Landing(landing);
        }
        self.overlay = None;
        self.dirty = true;
    }
}
