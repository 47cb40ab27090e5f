use serde::{Deserialize, Serialize};

use crate::ids::{ColourSetId, PresetIndex};

/// One entry of a preset: a colour set and the preset index of its block.
///
/// Serialized as a two element array `[colourSetId, presetIndex]`, which is
/// the stored preset format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct PresetPair {
	pub colour_set: ColourSetId,
	pub preset_index: PresetIndex,
}

impl PresetPair {
	pub fn new(colour_set: u32, preset_index: u32) -> Self {
		Self {
			colour_set: ColourSetId(colour_set),
			preset_index: PresetIndex(preset_index),
		}
	}
}

impl From<(u32, u32)> for PresetPair {
	fn from((colour_set, preset_index): (u32, u32)) -> Self {
		Self::new(colour_set, preset_index)
	}
}

impl From<PresetPair> for (u32, u32) {
	fn from(pair: PresetPair) -> Self {
		(pair.colour_set.0, pair.preset_index.0)
	}
}
