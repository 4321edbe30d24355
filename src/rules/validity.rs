//! Set validity.
//!
//! Three cards form a set when, on every axis, their values are all the
//! same or all different. Any two cards are completed by exactly one third
//! card, which `third_card` computes directly; `find_sets` uses that to
//! search a board in O(n²) instead of checking every triple.

use rustc_hash::FxHashMap;

use crate::cards::{features_make_set, Card, CardId, FeatureAxis};

/// Check whether three cards form a set.
///
/// Symmetric in its arguments.
#[must_use]
pub fn is_a_set(a: &Card, b: &Card, c: &Card) -> bool {
    FeatureAxis::ALL
        .iter()
        .all(|&axis| features_make_set(a.feature(axis), b.feature(axis), c.feature(axis)))
}

/// Same as `is_a_set`, by id.
#[must_use]
pub fn ids_form_set(a: CardId, b: CardId, c: CardId) -> bool {
    is_a_set(&Card::from_id(a), &Card::from_id(b), &Card::from_id(c))
}

/// The unique card that forms a set with `a` and `b`.
///
/// When `a == b` this is `a` itself, which can never be part of a real
/// triple of distinct cards.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    Card::new(
        a.number.complement(b.number),
        a.shape.complement(b.shape),
        a.shading.complement(b.shading),
        a.color.complement(b.color),
    )
}

/// All sets among `cards`, as index triples `i < j < k` in ascending order.
#[must_use]
pub fn find_set_indices(cards: &[Card]) -> Vec<[usize; 3]> {
    let positions: FxHashMap<CardId, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();

    let mut found = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = third_card(&cards[i], &cards[j]).id();
            if let Some(&k) = positions.get(&wanted) {
                if k > j {
                    found.push([i, j, k]);
                }
            }
        }
    }
    found.sort_unstable();
    found
}

/// All sets among `cards`.
#[must_use]
pub fn find_sets(cards: &[Card]) -> Vec<[Card; 3]> {
    find_set_indices(cards)
        .into_iter()
        .map(|[i, j, k]| [cards[i], cards[j], cards[k]])
        .collect()
}

/// Check whether any set exists among `cards`.
#[must_use]
pub fn contains_set(cards: &[Card]) -> bool {
    !find_set_indices(cards).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_universe, Feature};

    fn card(n: Feature, s: Feature, sh: Feature, c: Feature) -> Card {
        Card::new(n, s, sh, c)
    }

    #[test]
    fn test_valid_sets() {
        use Feature::*;

        // All different on every axis
        assert!(is_a_set(
            &card(One, One, One, One),
            &card(Two, Two, Two, Two),
            &card(Three, Three, Three, Three),
        ));

        // Same color, everything else different
        assert!(is_a_set(
            &card(One, Two, Three, One),
            &card(Two, Three, One, One),
            &card(Three, One, Two, One),
        ));
    }

    #[test]
    fn test_invalid_sets() {
        use Feature::*;

        // Shading has two Ones and a Two
        assert!(!is_a_set(
            &card(One, One, One, One),
            &card(Two, Two, One, Two),
            &card(Three, Three, Two, Three),
        ));
    }

    #[test]
    fn test_shading_is_checked_per_card() {
        use Feature::*;

        // Everything lines up except shading, where only the first card
        // differs. The check must look at all three cards on every axis.
        let a = card(One, One, One, One);
        let b = card(Two, Two, Two, Two);
        let c = card(Three, Three, Two, Three);
        assert!(!is_a_set(&a, &b, &c));
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        let cards = build_universe();
        let (a, b, c) = (&cards[4], &cards[40], &cards[76]);
        let expected = is_a_set(a, b, c);

        assert_eq!(is_a_set(a, c, b), expected);
        assert_eq!(is_a_set(b, a, c), expected);
        assert_eq!(is_a_set(b, c, a), expected);
        assert_eq!(is_a_set(c, a, b), expected);
        assert_eq!(is_a_set(c, b, a), expected);
    }

    #[test]
    fn test_third_card_completes_set() {
        let cards = build_universe();
        for a in &cards {
            for b in &cards {
                if a == b {
                    continue;
                }
                let c = third_card(a, b);
                assert_ne!(&c, a);
                assert_ne!(&c, b);
                assert!(is_a_set(a, b, &c));
                assert_eq!(third_card(b, a), c);
            }
        }
    }

    #[test]
    fn test_find_sets() {
        use Feature::*;

        let board = vec![
            card(One, One, One, One),
            card(One, One, One, Two),
            card(Two, Two, Two, Two),
            card(One, One, One, Three),
            card(Three, Three, Three, Three),
        ];

        let sets = find_set_indices(&board);
        assert_eq!(sets, vec![[0, 1, 3], [0, 2, 4]]);
        assert!(contains_set(&board));

        let found = find_sets(&board);
        assert_eq!(found[0], [board[0], board[1], board[3]]);
    }

    #[test]
    fn test_no_sets() {
        use Feature::*;

        let board = vec![
            card(One, One, One, One),
            card(One, One, One, Two),
            card(Two, One, One, One),
        ];
        assert!(find_sets(&board).is_empty());
        assert!(!contains_set(&board));
        assert!(!contains_set(&[]));
    }

    #[test]
    fn test_universe_set_count() {
        // 81 * 80 / 6 = 1080 sets in the full deck
        assert_eq!(find_set_indices(&build_universe()).len(), 1080);
    }
}
