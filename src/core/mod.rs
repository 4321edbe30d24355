//! Core engine types: state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, MatchAdvance, DEFAULT_REFILL_DEAL, DEFAULT_STARTING_DEAL};
pub use rng::{GameRng, GameRngState};
pub use state::{GameSnapshot, GameState};
