//! Command handlers.

pub mod config;
pub mod events;
pub mod portal;
