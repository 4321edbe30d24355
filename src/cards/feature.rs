//! Card features.
//!
//! Every card carries one `Feature` on each of four `FeatureAxis` values.
//! The engine never interprets what a variant looks like (a diamond, a
//! stripe, red); presentation maps variants to visuals.

use serde::{Deserialize, Serialize};

/// One of the three values a card can take on a feature axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    One,
    Two,
    Three,
}

impl Feature {
    /// All variants, in index order.
    pub const ALL: [Feature; 3] = [Feature::One, Feature::Two, Feature::Three];

    /// Zero-based index of this variant.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Feature::One => 0,
            Feature::Two => 1,
            Feature::Three => 2,
        }
    }

    /// Variant for a zero-based index, `None` if the index is not 0..3.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Feature::One),
            1 => Some(Feature::Two),
            2 => Some(Feature::Three),
            _ => None,
        }
    }

    /// The conventional 1-based value (number of symbols drawn, etc).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.index() + 1
    }

    /// The variant that differs from both `self` and `other`, or `self`
    /// when the two are equal.
    ///
    /// This is the value a third card needs on this axis to complete a set.
    #[must_use]
    pub const fn complement(self, other: Feature) -> Feature {
        if self.index() == other.index() {
            return self;
        }
        // Indices 0 + 1 + 2 = 3, so the missing one is 3 - a - b.
        match Feature::from_index(3 - self.index() - other.index()) {
            Some(f) => f,
            None => self,
        }
    }
}

/// Check whether three values on one axis are all equal or all distinct.
#[must_use]
pub fn features_make_set(a: Feature, b: Feature, c: Feature) -> bool {
    let all_same = a == b && b == c;
    let all_distinct = a != b && b != c && a != c;
    all_same || all_distinct
}

/// The four independent properties of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureAxis {
    Number,
    Shape,
    Shading,
    Color,
}

impl FeatureAxis {
    /// All axes, in card-id digit order.
    pub const ALL: [FeatureAxis; 4] = [
        FeatureAxis::Number,
        FeatureAxis::Shape,
        FeatureAxis::Shading,
        FeatureAxis::Color,
    ];
}
