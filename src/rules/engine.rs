//! Rules engine trait.
//!
//! `RulesEngine` is the action-as-data face of a game:
//! - What actions are legal right now
//! - How an action changes the game
//! - Whether the game is over
//!
//! `SetGame` implements it on top of its typed command methods, so an
//! adapter can either call `select_card` directly or apply
//! `Action::SelectCard`.

use serde::{Deserialize, Serialize};

use super::selection::{SelectionState, SET_SIZE};
use crate::cards::CardId;
use crate::core::action::Action;
use crate::error::GameError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Sets found.
    pub score: u32,
    /// Cards left on the board with no set among them.
    pub cards_left: usize,
}

/// What applying an action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A new game was started.
    NewGame,
    /// A tap was handled; the selection is now in this state.
    Selected(SelectionState),
    /// This many cards were dealt.
    Dealt(usize),
    /// The confirmed set that was discarded, or `None` if there was none.
    Discarded(Option<[CardId; SET_SIZE]>),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Every action that would change the game
/// - `apply_action`: Must be deterministic given the same seed
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Enumerate the actions that would change the game.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action.
    ///
    /// On error the game is unchanged.
    fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, GameError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Apply a sequence of actions, stopping at the first error.
    fn apply_all<'a, I>(&mut self, actions: I) -> Result<Vec<ActionOutcome>, GameError>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        actions
            .into_iter()
            .map(|action| self.apply_action(action))
            .collect()
    }
}
