//! # set-engine
//!
//! Rules engine for the card-matching game Set.
//!
//! ## Design Principles
//!
//! 1. **State plus transitions**: No rendering, timing or I/O. A
//!    presentation layer forwards taps as commands and redraws from
//!    snapshots.
//!
//! 2. **One source of truth**: Zones and the selection store `CardId`s
//!    only. Matched flags and display status are derived on the way out.
//!
//! 3. **Explicit transitions**: A tap is a pure function from the current
//!    selection to a `Step`, applied atomically by the engine.
//!
//! ## Modules
//!
//! - `core`: State, actions, RNG, configuration
//! - `cards`: Features, card identity, the 81-card universe
//! - `zones`: Deck, board and discard pile
//! - `rules`: Set validity, the selection state machine, `RulesEngine`
//! - `game`: `SetGame`, the engine a presentation layer owns
//!
//! ## Example
//!
//! ```
//! use set_engine::{SetGame, SelectionState};
//!
//! let mut game = SetGame::new(42);
//! game.deal_cards();
//! assert_eq!(game.board().len(), 12);
//!
//! if let Some(set) = game.hint() {
//!     for card in set {
//!         game.select_card(card).unwrap();
//!     }
//!     assert_eq!(game.selection_state(), SelectionState::DecidedMatch);
//!     assert_eq!(game.score(), 1);
//! }
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameRngState, GameSnapshot, GameState, MatchAdvance,
};

pub use crate::cards::{build_universe, Card, CardId, Feature, FeatureAxis, UNIVERSE_SIZE};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::rules::{
    find_sets, is_a_set, third_card, ActionOutcome, CardStatus, GameResult, RulesEngine, Selection,
    SelectionState,
};

pub use crate::game::{SetGame, SetGameBuilder};

pub use crate::error::GameError;
