//! Per-stage game state and the predicates that gate each stage.
//!
//! Each module here is pure: it knows its own rules but nothing about
//! timers, the itinerary, or the collaborator. The engine wires them up.

pub mod emoji;
pub mod hydration;
pub mod memory;
pub mod quiz;
pub mod riddle;
pub mod show;
pub mod unlock;
