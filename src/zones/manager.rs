//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks where each card is and handles movement
//! between the deck, the board and the discard pile. Every zone is ordered;
//! a card is in at most one zone at a time, so the three piles can never
//! share a card.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Where a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down, not yet dealt. Dealt from the front.
    Deck,
    /// Face-up and selectable.
    Board,
    /// Confirmed sets, in the order they were discarded.
    Discard,
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use set_engine::zones::{Zone, ZoneManager};
/// use set_engine::cards::CardId;
///
/// let mut manager = ZoneManager::new();
/// for id in CardId::all().take(5) {
///     manager.add_to_zone(id, Zone::Deck);
/// }
///
/// // Deal three from the front of the deck
/// let dealt = manager.move_front(Zone::Deck, Zone::Board, 3);
/// assert_eq!(dealt, 3);
/// assert_eq!(manager.zone_size(Zone::Board), 3);
/// assert_eq!(manager.zone_size(Zone::Deck), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, Zone>,

    deck: Vec<CardId>,
    board: Vec<CardId>,
    discard: Vec<CardId>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn order(&self, zone: Zone) -> &Vec<CardId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Board => &self.board,
            Zone::Discard => &self.discard,
        }
    }

    fn order_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Board => &mut self.board,
            Zone::Discard => &mut self.discard,
        }
    }

    /// Add a card to the end of a zone.
    ///
    /// Panics if the card is already in the manager.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone) {
        if self.locations.contains_key(&card) {
            panic!("Card {card} already exists in zone manager");
        }

        self.locations.insert(card, zone);
        self.order_mut(zone).push(card);
    }

    /// Move a card to the end of another zone.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, card: CardId, new_zone: Zone) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;

        if old_zone == new_zone {
            return Some(old_zone);
        }

        self.order_mut(old_zone).retain(|&c| c != card);
        self.locations.insert(card, new_zone);
        self.order_mut(new_zone).push(card);

        Some(old_zone)
    }

    /// Move up to `count` cards from the front of `from` to the end of `to`,
    /// keeping their order.
    ///
    /// Returns how many cards moved.
    pub fn move_front(&mut self, from: Zone, to: Zone, count: usize) -> usize {
        if from == to {
            return 0;
        }

        let take = count.min(self.order(from).len());
        let moved: Vec<CardId> = self.order_mut(from).drain(..take).collect();

        for &card in &moved {
            self.locations.insert(card, to);
        }
        self.order_mut(to).extend(moved);

        take
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Get the cards in a zone, in order (front first).
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        self.order(zone)
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.order(zone).len()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    /// Forget every card.
    pub fn clear(&mut self) {
        self.locations.clear();
        self.deck.clear();
        self.board.clear();
        self.discard.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u8) -> CardId {
        CardId::try_from(raw).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(id(10), Zone::Deck);
        manager.add_to_zone(id(11), Zone::Board);

        assert_eq!(manager.get_zone(id(10)), Some(Zone::Deck));
        assert_eq!(manager.get_zone(id(11)), Some(Zone::Board));
        assert_eq!(manager.get_zone(id(70)), None);
        assert!(manager.is_in_zone(id(10), Zone::Deck));
        assert!(!manager.is_in_zone(id(10), Zone::Board));
    }

    #[test]
    fn test_zone_order() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(id(12), Zone::Deck);
        manager.add_to_zone(id(10), Zone::Deck);
        manager.add_to_zone(id(11), Zone::Deck);

        assert_eq!(manager.cards_in_zone(Zone::Deck), &[id(12), id(10), id(11)]);
    }

    #[test]
    fn test_move_between_zones() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(id(10), Zone::Board);
        manager.add_to_zone(id(11), Zone::Board);

        let old = manager.move_to_zone(id(10), Zone::Discard);

        assert_eq!(old, Some(Zone::Board));
        assert_eq!(manager.get_zone(id(10)), Some(Zone::Discard));
        assert_eq!(manager.cards_in_zone(Zone::Board), &[id(11)]);
        assert_eq!(manager.zone_size(Zone::Discard), 1);

        assert_eq!(manager.move_to_zone(id(50), Zone::Discard), None);
    }

    #[test]
    fn test_move_front() {
        let mut manager = ZoneManager::new();
        for raw in 0..5 {
            manager.add_to_zone(id(raw), Zone::Deck);
        }
        manager.add_to_zone(id(40), Zone::Board);

        assert_eq!(manager.move_front(Zone::Deck, Zone::Board, 3), 3);
        assert_eq!(
            manager.cards_in_zone(Zone::Board),
            &[id(40), id(0), id(1), id(2)]
        );
        assert_eq!(manager.cards_in_zone(Zone::Deck), &[id(3), id(4)]);
        assert!(manager.is_in_zone(id(2), Zone::Board));

        // Only two left
        assert_eq!(manager.move_front(Zone::Deck, Zone::Board, 3), 2);
        assert_eq!(manager.move_front(Zone::Deck, Zone::Board, 3), 0);
        assert_eq!(manager.zone_size(Zone::Board), 6);
        assert_eq!(manager.total_cards(), 6);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_card_panics() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(id(10), Zone::Deck);
        manager.add_to_zone(id(10), Zone::Board); // Should panic
    }

    #[test]
    fn test_clear() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(id(1), Zone::Deck);
        manager.add_to_zone(id(2), Zone::Discard);

        manager.clear();

        assert_eq!(manager.total_cards(), 0);
        assert!(!manager.contains(id(1)));
        for zone in [Zone::Deck, Zone::Board, Zone::Discard] {
            assert_eq!(manager.zone_size(zone), 0);
        }
    }
}
