//! Terminal front end for the birthday surprise.
//!
//! Wraps the stage engine in a ratatui interface: one view per stage, a
//! keyboard-driven [`app::App`], and a background [`worker::Worker`] that
//! fulfils content requests without blocking the UI.

pub mod app;
pub mod input;
pub mod shared;
pub mod terminal;
pub mod views;
pub mod worker;
