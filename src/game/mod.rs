//! The game of Set.
//!
//! - 81 cards, one per combination of four 3-valued features
//! - 12 cards are dealt face-up, then 3 at a time on request
//! - Pick three cards; if every feature is all-same or all-different
//!   across them, they are a set and score a point
//! - The game ends when the deck is empty and no set is left on the board

mod set_game;

pub use set_game::{SetGame, SetGameBuilder};
