//! Role dashboards: a sidebar menu plus a content panel per section.
//!
//! Dashboard content is a fixed portal snapshot; the only behavior here is
//! section selection via the menu.

mod content;
mod render;
mod state;

pub use render::render_dashboard;
pub use state::{DashboardState, SectionDef, sections_for};
