//! UI event types.
//!
//! Every input the reducer sees arrives as a `UiEvent`. Terminal events
//! (keys, mouse, resize) are wrapped unmodified; `Tick` drives time-based
//! housekeeping such as toast expiry.

use crossterm::event::Event;

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer tick.
    Tick,
    /// Raw terminal event (key, mouse, resize).
    Terminal(Event),
}
