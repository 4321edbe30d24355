//! Zone system for card locations.
//!
//! A Set game has three zones: the face-down deck, the face-up board and
//! the discard pile. `ZoneManager` keeps each card in exactly one of them.

pub mod manager;

pub use manager::{Zone, ZoneManager};
