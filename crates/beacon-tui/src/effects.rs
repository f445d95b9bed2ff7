//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (no direct UI mutations). This keeps the reducer
//! pure: it only mutates state and returns effects, never performs I/O.

use beacon_core::config::ThemeChoice;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Open an event's registration link in the system browser.
    OpenRegistration { url: String },

    /// Persist the theme preference to config.
    PersistTheme { theme: ThemeChoice },
}
