//! Carousel cursor state and navigation primitives.
//!
//! The cursor is always a valid index into the catalog: every mutation goes
//! through modular arithmetic, so navigation is circular in both directions
//! with no "stop at ends" behavior. The catalog itself is fixed for the
//! lifetime of the view.

use anyhow::{Result, ensure};
use beacon_core::catalog::EventEntry;

/// A navigation intent produced by one of the input adapters.
///
/// All three input channels (directional clicks, keyboard, wheel) reduce to
/// these values; none holds its own cursor copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    JumpTo(usize),
}

/// Cursor over the event catalog.
#[derive(Debug)]
pub struct CarouselState {
    catalog: &'static [EventEntry],
    index: usize,
}

impl CarouselState {
    /// Creates a carousel over the given catalog, starting at position 0.
    ///
    /// An empty catalog makes the modular arithmetic undefined, so it is
    /// rejected here at construction rather than handled at navigation time.
    pub fn new(catalog: &'static [EventEntry]) -> Result<Self> {
        ensure!(!catalog.is_empty(), "event catalog must not be empty");
        Ok(Self { catalog, index: 0 })
    }

    /// Moves the cursor to the next entry, wrapping past the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.catalog.len();
    }

    /// Moves the cursor to the previous entry, wrapping past the first one.
    ///
    /// The `+ len` term keeps the arithmetic well-defined for the unsigned
    /// index representation.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.catalog.len() - 1) % self.catalog.len();
    }

    /// Moves the cursor directly to `target`.
    ///
    /// Indicator controls are generated from the catalog itself, so an
    /// out-of-range target is a programming defect in the caller, not a
    /// recoverable runtime error.
    pub fn jump_to(&mut self, target: usize) {
        debug_assert!(
            target < self.catalog.len(),
            "jump_to target {target} out of range 0..{}",
            self.catalog.len()
        );
        if target < self.catalog.len() {
            self.index = target;
        }
    }

    /// Applies a navigation intent from any input adapter.
    pub fn apply(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Next => self.advance(),
            NavIntent::Previous => self.retreat(),
            NavIntent::JumpTo(i) => self.jump_to(i),
        }
    }

    /// The entry under the cursor. Pure projection, no side effects.
    pub fn current(&self) -> &EventEntry {
        &self.catalog[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        false // rejected at construction
    }

    /// Per-position active flags for the indicator strip.
    ///
    /// Exactly one entry is true: the current cursor position.
    pub fn indicator_states(&self) -> Vec<bool> {
        (0..self.catalog.len()).map(|i| i == self.index).collect()
    }
}
