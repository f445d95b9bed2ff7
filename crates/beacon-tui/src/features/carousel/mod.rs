//! The landing-page event carousel.
//!
//! This is the one component with real behavioral logic in the portal: a
//! cyclically-indexed cursor over the fixed event catalog, fed by three
//! input channels (directional clicks, keyboard, wheel) that all funnel
//! into the same navigation primitives.

mod render;
mod state;
mod update;

pub use render::render_carousel;
pub use state::{CarouselState, NavIntent};
pub use update::{CarouselAction, key_intent, mouse_action};
