//! Serialized shapes of the registry data files.
//!
//! These mirror the JSON exactly (including its key casing) and are compiled
//! into the lookup structures in [`crate::colours`] and [`crate::versions`].

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Colour sets keyed by decimal colour set id, in file order.
pub type ColoursSpec = IndexMap<String, ColourSetSpec>;

/// Supported versions keyed by version id, oldest first.
pub type VersionsSpec = IndexMap<String, SupportedVersionSpec>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourSetSpec {
	pub colour_name: String,
	#[serde(rename = "tonesRGB")]
	pub tones_rgb: TonesSpec,
	pub blocks: IndexMap<String, BlockSpec>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TonesSpec {
	pub dark: [u8; 3],
	pub normal: [u8; 3],
	pub light: [u8; 3],
	pub unobtainable: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSpec {
	pub display_name: String,
	pub preset_index: u32,
	pub valid_versions: IndexMap<String, VersionEntrySpec>,
}

/// Per-version block data, either inline or `"&<version>"` referring to
/// another version of the same block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionEntrySpec {
	Alias(String),
	Block {
		#[serde(rename = "NBTName")]
		nbt_name: String,
		#[serde(rename = "NBTArgs", default)]
		nbt_args: BTreeMap<String, String>,
	},
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedVersionSpec {
	#[serde(rename = "MCVersion")]
	pub mc_version: String,
	#[serde(rename = "NBT_dataVersion")]
	pub data_version: u32,
}
