//! Engine error types.

use thiserror::Error;

use crate::cards::CardId;

/// Errors returned by the engine's fallible operations.
///
/// Commands never leave the game half-updated: when an error is returned
/// the state is exactly what it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The card is not face-up on the board, so it cannot be selected.
    #[error("card {0} is not on the board")]
    CardNotOnBoard(CardId),

    /// Raw card id outside the 81-card universe.
    #[error("invalid card id {0}, expected 0..81")]
    InvalidCardId(u8),

    /// Configuration rejected by `GameConfig::validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidCardId(90);
        assert_eq!(err.to_string(), "invalid card id 90, expected 0..81");

        let err = GameError::InvalidConfig("refill_deal must be at least 1".into());
        assert!(err.to_string().contains("refill_deal"));
    }
}
