//! Player intents as data.
//!
//! Each engine command has an `Action` counterpart so that adapters, bots
//! and replays can drive a game through `RulesEngine::apply_action` and the
//! game can keep a history of what was applied.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A command a player (or the presentation layer on their behalf) issues.
///
/// ## Example
///
/// ```
/// use set_engine::core::Action;
/// use set_engine::cards::CardId;
///
/// let tap = Action::SelectCard(CardId::try_from(5).unwrap());
/// assert_eq!(tap.card(), CardId::try_from(5).ok());
/// assert_eq!(Action::DealCards.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Start over with a freshly shuffled deck.
    NewGame,
    /// Tap a card on the board.
    SelectCard(CardId),
    /// Deal from the deck (12 onto an empty board, else 3).
    DealCards,
    /// Discard a confirmed set if there is one, then deal.
    DealMoreCards,
    /// Move a confirmed set to the discard pile.
    DiscardMatched,
}

impl Action {
    /// The card this action targets, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::SelectCard(card) => Some(*card),
            _ => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Game number (1 for the first game, +1 per new game).
    pub game: u32,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, game: u32, sequence: u32) -> Self {
        Self {
            action,
            game,
            sequence,
        }
    }
}
