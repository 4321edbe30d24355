//! Card system: features, card identity, and the 81-card universe.
//!
//! ## Key Types
//!
//! - `Feature`: One of three values on an axis
//! - `FeatureAxis`: Number, shape, shading, color
//! - `CardId`: Dense identifier in `0..81`, what zones store
//! - `Card`: Feature tuple plus the derived `is_matched` flag

pub mod card;
pub mod deck;
pub mod feature;

pub use card::{Card, CardId, UNIVERSE_SIZE};
pub use deck::{build_universe, shuffle, shuffled_deck};
pub use feature::{features_make_set, Feature, FeatureAxis};
