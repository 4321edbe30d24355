//! Game configuration types.
//!
//! The defaults are the standard rules: an opening spread of 12 cards,
//! refills of 3, and a confirmed set that stays on the table until the
//! player's next tap. `SetGameBuilder` is the usual way to change them.

use serde::{Deserialize, Serialize};

use crate::cards::UNIVERSE_SIZE;
use crate::error::GameError;

/// Cards dealt onto an empty board.
pub const DEFAULT_STARTING_DEAL: usize = 12;

/// Cards dealt onto a non-empty board.
pub const DEFAULT_REFILL_DEAL: usize = 3;

/// What happens to a confirmed set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAdvance {
    /// The set stays on the board, highlighted, until the next tap or an
    /// explicit discard.
    #[default]
    OnNextTap,
    /// The set is discarded in the same transition that scores it.
    Immediate,
}

/// Rules configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt when the board is empty.
    pub starting_deal: usize,

    /// Cards dealt when the board already has cards.
    pub refill_deal: usize,

    /// When a confirmed set leaves the board.
    #[serde(default)]
    pub match_advance: MatchAdvance,

    /// Deal a refill after a set is discarded by a tap or by
    /// "deal more cards".
    #[serde(default)]
    pub refill_after_match: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_deal: DEFAULT_STARTING_DEAL,
            refill_deal: DEFAULT_REFILL_DEAL,
            match_advance: MatchAdvance::default(),
            refill_after_match: false,
        }
    }
}

impl GameConfig {
    /// Check that the deal sizes are usable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_deal == 0 || self.starting_deal > UNIVERSE_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "starting_deal must be in 1..={UNIVERSE_SIZE}, got {}",
                self.starting_deal
            )));
        }
        if self.refill_deal == 0 {
            return Err(GameError::InvalidConfig(
                "refill_deal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of cards to deal onto a board of the given size.
    #[must_use]
    pub fn deal_size(&self, board_len: usize) -> usize {
        if board_len == 0 {
            self.starting_deal
        } else {
            self.refill_deal
        }
    }
}
