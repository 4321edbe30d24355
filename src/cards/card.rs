//! Card identity and values.
//!
//! A card is fully identified by its four features. `CardId` packs those
//! features into a dense base-3 number in `0..81`, which is what zones and
//! the selection store. `Card` is the value handed to callers; its
//! `is_matched` flag is filled in by the engine when the card is projected
//! out of the game and never takes part in equality.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureAxis};
use crate::error::GameError;

/// Number of distinct cards: one per combination of four 3-valued features.
pub const UNIVERSE_SIZE: usize = 81;

/// Dense card identifier in `0..81`.
///
/// Digits (base 3, least significant first): number, shape, shading, color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Build the id for a combination of features.
    #[must_use]
    pub const fn from_features(number: Feature, shape: Feature, shading: Feature, color: Feature) -> Self {
        Self(number.index() + 3 * shape.index() + 9 * shading.index() + 27 * color.index())
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Feature value on an axis.
    #[must_use]
    pub fn feature(self, axis: FeatureAxis) -> Feature {
        let digit = match axis {
            FeatureAxis::Number => self.0 % 3,
            FeatureAxis::Shape => (self.0 / 3) % 3,
            FeatureAxis::Shading => (self.0 / 9) % 3,
            FeatureAxis::Color => (self.0 / 27) % 3,
        };
        Feature::ALL[digit as usize]
    }

    /// Iterate over every id in the universe, in ascending order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..UNIVERSE_SIZE as u8).map(CardId)
    }
}

impl TryFrom<u8> for CardId {
    type Error = GameError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if (raw as usize) < UNIVERSE_SIZE {
            Ok(Self(raw))
        } else {
            Err(GameError::InvalidCardId(raw))
        }
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A Set card.
///
/// Equality and hashing use the four features only; two copies of the same
/// card with different `is_matched` flags compare equal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub number: Feature,
    pub shape: Feature,
    pub shading: Feature,
    pub color: Feature,

    /// Set while the card is part of a confirmed, not yet discarded set.
    #[serde(default)]
    pub is_matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub const fn new(number: Feature, shape: Feature, shading: Feature, color: Feature) -> Self {
        Self {
            number,
            shape,
            shading,
            color,
            is_matched: false,
        }
    }

    /// Create the unmatched card with the given id.
    #[must_use]
    pub fn from_id(id: CardId) -> Self {
        Self::new(
            id.feature(FeatureAxis::Number),
            id.feature(FeatureAxis::Shape),
            id.feature(FeatureAxis::Shading),
            id.feature(FeatureAxis::Color),
        )
    }

    /// This card's identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::from_features(self.number, self.shape, self.shading, self.color)
    }

    /// Feature value on an axis.
    #[must_use]
    pub const fn feature(&self, axis: FeatureAxis) -> Feature {
        match axis {
            FeatureAxis::Number => self.number,
            FeatureAxis::Shape => self.shape,
            FeatureAxis::Shading => self.shading,
            FeatureAxis::Color => self.color,
        }
    }

    /// Copy of this card with the matched flag set to `matched`.
    #[must_use]
    pub fn with_matched(mut self, matched: bool) -> Self {
        self.is_matched = matched;
        self
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        Card::from_id(id)
    }
}

impl From<Card> for CardId {
    fn from(card: Card) -> Self {
        card.id()
    }
}

impl From<&Card> for CardId {
    fn from(card: &Card) -> Self {
        card.id()
    }
}
