//! Game state and the snapshot handed to presentation.
//!
//! ## GameState
//!
//! Everything one game owns:
//! - Zone manager (deck, board, discard)
//! - Selection (card ids only)
//! - Score
//! - RNG and action history
//!
//! The matched flag is never stored. `card` derives it from the selection,
//! so there is exactly one source of truth for which cards are matched.
//!
//! ## GameSnapshot
//!
//! Serializable, self-contained view for the presentation layer. The deck
//! is face-down, so only its size is included.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::rng::GameRng;
use crate::cards::{Card, CardId};
use crate::rules::selection::{CardStatus, Selection, SelectionState};
use crate::zones::{Zone, ZoneManager};

/// Complete mutable state of a game.
///
/// Uses `im::Vector` for the history so snapshots of long sessions clone in
/// O(1).
#[derive(Clone, Debug)]
pub struct GameState {
    /// Card locations.
    pub zones: ZoneManager,

    /// Deterministic RNG.
    pub rng: GameRng,

    selection: Selection,

    score: u32,

    /// Game number (0 before the first game starts).
    game_number: u32,

    /// Action sequence within the current game.
    action_sequence: u32,

    /// Applied actions across all games of this session.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create an empty state; no game has started yet.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            zones: ZoneManager::new(),
            rng,
            selection: Selection::new(),
            score: 0,
            game_number: 0,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    /// Replace all card state with a fresh deck and bump the game number.
    pub fn reset(&mut self, deck: impl IntoIterator<Item = CardId>) {
        self.zones.clear();
        for card in deck {
            self.zones.add_to_zone(card, Zone::Deck);
        }
        self.selection = Selection::new();
        self.score = 0;
        self.game_number += 1;
        self.action_sequence = 0;
    }

    // === Selection & Score ===

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Count one more confirmed set.
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    // === Projection ===

    /// The card for `id`, with its matched flag derived from the selection.
    #[must_use]
    pub fn card(&self, id: CardId) -> Card {
        Card::from_id(id).with_matched(self.selection.is_matched(id))
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> Vec<Card> {
        self.zones
            .cards_in_zone(zone)
            .iter()
            .map(|&id| self.card(id))
            .collect()
    }

    /// Selected cards, in pick order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<Card> {
        self.selection.cards().iter().map(|&id| self.card(id)).collect()
    }

    /// Display status of a card.
    #[must_use]
    pub fn card_status(&self, id: CardId) -> CardStatus {
        self.selection.status_of(id)
    }

    /// Build a snapshot for presentation.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game: self.game_number,
            deck_size: self.zones.zone_size(Zone::Deck),
            board: self.cards_in(Zone::Board),
            discard: self.cards_in(Zone::Discard),
            selected: self.selected_cards(),
            selection_state: self.selection.state(),
            score: self.score,
        }
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    /// Every action applied so far, across all games of the session.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Drop the recorded history. Sequence numbers are not reset.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Read-only view of a game for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game number within the session.
    pub game: u32,
    /// Cards left to deal.
    pub deck_size: usize,
    /// Face-up cards, in deal order, with matched flags.
    pub board: Vec<Card>,
    /// Discarded sets, oldest first.
    pub discard: Vec<Card>,
    /// Current picks, in pick order.
    pub selected: Vec<Card>,
    pub selection_state: SelectionState,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Feature;

    #[test]
    fn test_reset() {
        let mut state = GameState::new(GameRng::new(1));
        assert_eq!(state.game_number(), 0);

        state.reset(CardId::all());
        state.add_point();

        assert_eq!(state.zones.zone_size(Zone::Deck), 81);
        assert_eq!(state.score(), 1);
        assert_eq!(state.game_number(), 1);

        state.reset(CardId::all().take(3));
        assert_eq!(state.zones.total_cards(), 3);
        assert_eq!(state.score(), 0);
        assert_eq!(state.game_number(), 2);
    }

    #[test]
    fn test_matched_flag_is_derived() {
        use Feature::*;

        let set = [
            Card::new(One, One, One, One).id(),
            Card::new(Two, Two, Two, Two).id(),
            Card::new(Three, Three, Three, Three).id(),
        ];

        let mut state = GameState::new(GameRng::new(1));
        state.reset(set);
        state.zones.move_front(Zone::Deck, Zone::Board, 3);

        let mut selection = Selection::new();
        for id in set {
            selection = crate::rules::transition(&selection, id, Default::default()).selection;
        }
        state.set_selection(selection);

        assert!(state.cards_in(Zone::Board).iter().all(|c| c.is_matched));
        assert_eq!(state.card_status(set[2]), CardStatus::Match);

        state.set_selection(Selection::new());
        assert!(state.cards_in(Zone::Board).iter().all(|c| !c.is_matched));
    }

    #[test]
    fn test_sequence_and_history() {
        use crate::core::Action;

        let mut state = GameState::new(GameRng::new(1));
        assert_eq!(state.next_sequence(), 0);
        assert_eq!(state.next_sequence(), 1);

        state.record_action(ActionRecord::new(Action::DealCards, 1, 1));
        assert_eq!(state.history().len(), 1);

        // Clones share structure and diverge independently
        let snapshot = state.clone();
        state.record_action(ActionRecord::new(Action::DealCards, 1, 2));
        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(state.history().len(), 2);

        state.clear_history();
        assert!(state.history().is_empty());
        assert_eq!(snapshot.history().len(), 1);
    }

    #[test]
    fn test_snapshot_serde() {
        let mut state = GameState::new(GameRng::new(1));
        state.reset(CardId::all());
        state.zones.move_front(Zone::Deck, Zone::Board, 12);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.deck_size, 69);
        assert_eq!(snapshot.board.len(), 12);
        assert_eq!(snapshot.selection_state, SelectionState::Empty);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
