//! Colour set registry.
//!
//! Each colour set (map colour) owns a list of candidate blocks. A block has
//! an opaque [`BlockId`], a [`PresetIndex`] that is unique within its colour
//! set and stable across data revisions, and the set of versions in which it
//! may be placed.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use mapart_primitives::{BlockId, ColourSetId, McVersion, PresetIndex};
use rustc_hash::FxHashMap as HashMap;

use crate::error::{RegistryError, Result};
use crate::spec::{BlockSpec, ColourSetSpec, ColoursSpec, TonesSpec, VersionEntrySpec};


/// Shade of a map colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
	Dark,
	Normal,
	Light,
	/// Only reachable by editing map data directly.
	Unobtainable,
}

impl Tone {
	pub fn as_str(self) -> &'static str {
		match self {
			Tone::Dark => "dark",
			Tone::Normal => "normal",
			Tone::Light => "light",
			Tone::Unobtainable => "unobtainable",
		}
	}
}

/// RGB values of the four shades of a colour set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tones {
	pub dark: [u8; 3],
	pub normal: [u8; 3],
	pub light: [u8; 3],
	pub unobtainable: [u8; 3],
}

impl Tones {
	pub fn get(&self, tone: Tone) -> [u8; 3] {
		match tone {
			Tone::Dark => self.dark,
			Tone::Normal => self.normal,
			Tone::Light => self.light,
			Tone::Unobtainable => self.unobtainable,
		}
	}
}

impl From<TonesSpec> for Tones {
	fn from(spec: TonesSpec) -> Self {
		Self {
			dark: spec.dark,
			normal: spec.normal,
			light: spec.light,
			unobtainable: spec.unobtainable,
		}
	}
}

/// Block state to emit for one version, with aliases already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedBlock {
	pub nbt_name: Box<str>,
	pub nbt_args: BTreeMap<Box<str>, Box<str>>,
}

/// One candidate block of a colour set.
#[derive(Debug, Clone)]
pub struct BlockDef {
	pub id: BlockId,
	pub display_name: Box<str>,
	pub preset_index: PresetIndex,
	valid_versions: IndexMap<McVersion, VersionedBlock>,
}

impl BlockDef {
	/// Returns true if this block may be used when targeting `version`.
	#[inline]
	pub fn is_valid_in(&self, version: &McVersion) -> bool {
		self.valid_versions.contains_key(version)
	}

	/// Block state for `version`, if the block exists there.
	pub fn versioned(&self, version: &McVersion) -> Option<&VersionedBlock> {
		self.valid_versions.get(version)
	}

	pub fn valid_versions(&self) -> impl Iterator<Item = &McVersion> {
		self.valid_versions.keys()
	}
}

/// A colour set and its candidate blocks, in data file order.
#[derive(Debug, Clone)]
pub struct ColourSetDef {
	pub id: ColourSetId,
	pub name: Box<str>,
	pub tones: Tones,
	blocks: IndexMap<BlockId, BlockDef>,
	by_preset_index: HashMap<PresetIndex, BlockId>,
}

impl ColourSetDef {
	pub fn blocks(&self) -> impl Iterator<Item = &BlockDef> {
		self.blocks.values()
	}

	pub fn block(&self, id: &BlockId) -> Option<&BlockDef> {
		self.blocks.get(id)
	}

	pub fn find_by_preset_index(&self, index: PresetIndex) -> Option<&BlockDef> {
		self.blocks.get(self.by_preset_index.get(&index)?)
	}

	fn compile(id: ColourSetId, spec: ColourSetSpec) -> Result<Self> {
		let mut blocks = IndexMap::with_capacity(spec.blocks.len());
		let mut by_preset_index: HashMap<PresetIndex, BlockId> = HashMap::default();

		for (key, block_spec) in spec.blocks {
			let block = compile_block(id, BlockId::new(key), block_spec)?;
			if let Some(existing) = by_preset_index.get(&block.preset_index) {
				return Err(RegistryError::DuplicatePresetIndex {
					colour_set: id,
					preset_index: block.preset_index,
					existing: existing.clone(),
					new: block.id,
				});
			}
			by_preset_index.insert(block.preset_index, block.id.clone());
			blocks.insert(block.id.clone(), block);
		}

		Ok(Self {
			id,
			name: spec.colour_name.into(),
			tones: spec.tones_rgb.into(),
			blocks,
			by_preset_index,
		})
	}
}

fn compile_block(colour_set: ColourSetId, id: BlockId, spec: BlockSpec) -> Result<BlockDef> {
	let mut valid_versions = IndexMap::with_capacity(spec.valid_versions.len());

	for (version, entry) in &spec.valid_versions {
		let resolved = resolve_entry(&spec.valid_versions, entry).ok_or_else(|| RegistryError::DanglingVersionAlias {
			colour_set,
			block: id.clone(),
			alias: version.clone(),
		})?;
		valid_versions.insert(McVersion::new(version.as_str()), resolved);
	}

	Ok(BlockDef {
		id,
		display_name: spec.display_name.into(),
		preset_index: PresetIndex(spec.preset_index),
		valid_versions,
	})
}

/// Follows `&<version>` aliases until an inline entry is found.
///
/// Alias chains longer than the entry count are cycles and fail to resolve.
fn resolve_entry<'a>(entries: &'a IndexMap<String, VersionEntrySpec>, mut entry: &'a VersionEntrySpec) -> Option<VersionedBlock> {
	for _ in 0..=entries.len() {
		match entry {
			VersionEntrySpec::Block { nbt_name, nbt_args } => {
				return Some(VersionedBlock {
					nbt_name: nbt_name.as_str().into(),
					nbt_args: nbt_args.iter().map(|(k, v)| (k.as_str().into(), v.as_str().into())).collect(),
				});
			}
			VersionEntrySpec::Alias(target) => {
				entry = entries.get(target.strip_prefix('&')?)?;
			}
		}
	}
	None
}

/// All colour sets known to the tool.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ColourRegistry {
	sets: BTreeMap<ColourSetId, ColourSetDef>,
}

impl ColourRegistry {
	/// Parses colour data in the `coloursJSON` format.
	pub fn from_json(json: &str) -> Result<Self> {
		let spec: ColoursSpec = serde_json::from_str(json).map_err(|source| RegistryError::Json { label: "colour", source })?;
		Self::from_spec(spec)
	}

	pub fn from_spec(spec: ColoursSpec) -> Result<Self> {
		let mut sets = BTreeMap::new();
		for (key, set_spec) in spec {
			let id: ColourSetId = key.parse()?;
			sets.insert(id, ColourSetDef::compile(id, set_spec)?);
		}
		tracing::debug!(colour_sets = sets.len(), "colour registry built");
		Ok(Self { sets })
	}

	/// All colour set ids in ascending order.
	pub fn group_ids(&self) -> impl Iterator<Item = ColourSetId> + '_ {
		self.sets.keys().copied()
	}

	pub fn colour_sets(&self) -> impl Iterator<Item = &ColourSetDef> {
		self.sets.values()
	}

	pub fn contains(&self, id: ColourSetId) -> bool {
		self.sets.contains_key(&id)
	}

	pub fn get(&self, id: ColourSetId) -> Option<&ColourSetDef> {
		self.sets.get(&id)
	}

	pub fn len(&self) -> usize {
		self.sets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sets.is_empty()
	}

	/// Candidate blocks of a colour set.
	pub fn variants_of(&self, id: ColourSetId) -> Result<impl Iterator<Item = &BlockDef>> {
		self.sets.get(&id).map(|set| set.blocks()).ok_or(RegistryError::UnknownGroup(id))
	}

	/// Looks up a block by id.
	pub fn block(&self, colour_set: ColourSetId, block: &BlockId) -> Result<&BlockDef> {
		let set = self.sets.get(&colour_set).ok_or(RegistryError::UnknownGroup(colour_set))?;
		set.block(block).ok_or_else(|| RegistryError::UnknownVariant {
			colour_set,
			block: block.clone(),
		})
	}

	/// Looks up the block with the given preset index; at most one exists.
	pub fn find_by_preset_index(&self, colour_set: ColourSetId, index: PresetIndex) -> Option<&BlockDef> {
		self.sets.get(&colour_set)?.find_by_preset_index(index)
	}
}
