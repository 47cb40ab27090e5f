//! Core types shared by the mapart crates: identifiers, preset pairs and the
//! positional numeral alphabets used by preset tokens.

/// Identifier types for colour sets, blocks and game versions.
pub mod ids;
/// `(colour set, preset index)` pairs as stored in presets and tokens.
pub mod pair;
/// Positional numerals over custom digit alphabets.
pub mod radix;

pub use ids::{BlockId, ColourSetId, McVersion, ParseIdError, PresetIndex};
pub use pair::PresetPair;
pub use radix::{Alphabet, COLOUR_SET_DIGITS, PRESET_INDEX_DIGITS};
