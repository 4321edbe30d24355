//! Rules of Set.
//!
//! - `validity`: when three cards form a set, and finding sets on a board
//! - `selection`: the pick / decide state machine, as a pure transition
//! - `engine`: the `RulesEngine` trait for driving a game with `Action`s

pub mod engine;
pub mod selection;
pub mod validity;

pub use engine::{ActionOutcome, GameResult, RulesEngine};
pub use selection::{transition, CardStatus, Selection, SelectionState, Step, SET_SIZE};
pub use validity::{contains_set, find_set_indices, find_sets, ids_form_set, is_a_set, third_card};
