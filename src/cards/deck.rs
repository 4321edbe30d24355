//! Deck construction.

use super::card::{Card, CardId, UNIVERSE_SIZE};
use crate::core::rng::GameRng;

/// Build all 81 cards, one per feature combination, none matched.
///
/// Cards come out in ascending `CardId` order.
#[must_use]
pub fn build_universe() -> Vec<Card> {
    let mut cards = Vec::with_capacity(UNIVERSE_SIZE);
    cards.extend(CardId::all().map(Card::from_id));
    cards
}

/// Shuffle cards into a uniformly random order.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}

/// A freshly shuffled deck of all 81 card ids.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<CardId> {
    let mut cards = build_universe();
    shuffle(&mut cards, rng);
    cards.iter().map(Card::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::FeatureAxis;
    use std::collections::HashSet;

    #[test]
    fn test_universe_is_complete() {
        let cards = build_universe();
        assert_eq!(cards.len(), 81);

        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 81);
        assert!(cards.iter().all(|c| !c.is_matched));

        // Each value appears 27 times on each axis
        for axis in FeatureAxis::ALL {
            for f in crate::cards::Feature::ALL {
                assert_eq!(cards.iter().filter(|c| c.feature(axis) == f).count(), 27);
            }
        }
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = GameRng::new(7);
        let mut cards = build_universe();
        shuffle(&mut cards, &mut rng);

        assert_ne!(cards, build_universe());

        let mut ids: Vec<_> = cards.iter().map(Card::id).collect();
        ids.sort();
        assert_eq!(ids, CardId::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_deck_is_seeded() {
        let a = shuffled_deck(&mut GameRng::new(99));
        let b = shuffled_deck(&mut GameRng::new(99));
        let c = shuffled_deck(&mut GameRng::new(100));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
