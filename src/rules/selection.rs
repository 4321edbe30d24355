//! Selection state machine.
//!
//! The selection holds up to three card ids, never copies of cards. Its
//! state is derived from its contents:
//!
//! | cards | valid set | state            |
//! |-------|-----------|------------------|
//! | 0     |           | `Empty`          |
//! | 1–2   |           | `Picking`        |
//! | 3     | yes       | `DecidedMatch`   |
//! | 3     | no        | `DecidedMismatch`|
//!
//! A tap is handled by `transition`, a pure function from the current
//! selection and the tapped card to a `Step`. The engine applies the step:
//! it moves `discard` to the discard pile, bumps the score if `scored`, and
//! stores the new selection. Nothing is evaluated implicitly on mutation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::validity::ids_form_set;
use crate::cards::CardId;
use crate::core::config::MatchAdvance;

/// Number of cards in a set.
pub const SET_SIZE: usize = 3;

/// Where the selection is in the pick / decide cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionState {
    Empty,
    Picking,
    DecidedMatch,
    DecidedMismatch,
}

impl SelectionState {
    /// Whether three cards have been picked and judged.
    #[must_use]
    pub fn is_decided(self) -> bool {
        matches!(self, SelectionState::DecidedMatch | SelectionState::DecidedMismatch)
    }
}

/// How a card should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    Unselected,
    Selected,
    Match,
    Nonmatch,
}

/// The player's current picks, in the order they were made.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[CardId; SET_SIZE]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding one card.
    #[must_use]
    pub fn single(card: CardId) -> Self {
        let mut cards = SmallVec::new();
        cards.push(card);
        Self { cards }
    }

    /// Selected ids, in pick order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// The three picks, if the selection is full.
    #[must_use]
    pub fn triple(&self) -> Option<[CardId; SET_SIZE]> {
        match self.cards.as_slice() {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Current state, evaluating the triple when full.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        match self.triple() {
            Some([a, b, c]) if ids_form_set(a, b, c) => SelectionState::DecidedMatch,
            Some(_) => SelectionState::DecidedMismatch,
            None if self.is_empty() => SelectionState::Empty,
            None => SelectionState::Picking,
        }
    }

    /// The confirmed set, if the selection holds one.
    #[must_use]
    pub fn matched(&self) -> Option<[CardId; SET_SIZE]> {
        self.triple().filter(|&[a, b, c]| ids_form_set(a, b, c))
    }

    /// Whether `card` is part of the confirmed set.
    #[must_use]
    pub fn is_matched(&self, card: CardId) -> bool {
        self.matched().is_some_and(|triple| triple.contains(&card))
    }

    /// Display status of `card`.
    #[must_use]
    pub fn status_of(&self, card: CardId) -> CardStatus {
        if !self.contains(card) {
            return CardStatus::Unselected;
        }
        match self.state() {
            SelectionState::DecidedMatch => CardStatus::Match,
            SelectionState::DecidedMismatch => CardStatus::Nonmatch,
            SelectionState::Empty | SelectionState::Picking => CardStatus::Selected,
        }
    }

    /// Toggle a card in a selection that is not yet full.
    fn toggle(&mut self, card: CardId) {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
        } else {
            self.cards.push(card);
        }
    }
}

/// Result of one tap, to be applied by the engine as a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Selection after the tap.
    pub selection: Selection,
    /// Confirmed set leaving the board, in pick order.
    pub discard: Option<[CardId; SET_SIZE]>,
    /// A new set was confirmed by this tap.
    pub scored: bool,
}

impl Step {
    /// State of the selection after the tap.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }
}

/// Compute the effect of tapping `card`, which must be on the board.
#[must_use]
pub fn transition(current: &Selection, card: CardId, policy: MatchAdvance) -> Step {
    match current.state() {
        SelectionState::Empty | SelectionState::Picking => {
            let mut selection = current.clone();
            selection.toggle(card);

            match (selection.matched(), policy) {
                (Some(triple), MatchAdvance::Immediate) => Step {
                    selection: Selection::new(),
                    discard: Some(triple),
                    scored: true,
                },
                (Some(_), MatchAdvance::OnNextTap) => Step {
                    selection,
                    discard: None,
                    scored: true,
                },
                (None, _) => Step {
                    selection,
                    discard: None,
                    scored: false,
                },
            }
        }
        SelectionState::DecidedMatch => {
            let triple = current.triple();
            // A tapped card from the set leaves with it.
            let selection = if current.contains(card) {
                Selection::new()
            } else {
                Selection::single(card)
            };
            Step {
                selection,
                discard: triple,
                scored: false,
            }
        }
        SelectionState::DecidedMismatch => Step {
            selection: Selection::single(card),
            discard: None,
            scored: false,
        },
    }
}
