//! Core types for the Beacon campus portal: configuration, the event
//! catalog, and login session context.

pub mod catalog;
pub mod config;
pub mod session;
