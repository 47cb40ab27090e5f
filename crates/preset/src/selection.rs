//! The live block choice for every colour set.

use std::collections::BTreeMap;

use mapart_primitives::{BlockId, ColourSetId, PresetPair};
use mapart_registry::ColourRegistry;

/// Colour set → chosen block, or `None` when the colour set is unused.
///
/// Holds an entry for every colour set of the registry it was created from;
/// unset is a value, a missing key is not. Mutation is reserved to
/// [`crate::SelectionReconciler`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
	blocks: BTreeMap<ColourSetId, Option<BlockId>>,
}

impl Selection {
	/// A selection with every colour set of `registry` unset.
	pub fn unset(registry: &ColourRegistry) -> Self {
		Self {
			blocks: registry.group_ids().map(|id| (id, None)).collect(),
		}
	}

	/// The chosen block, or `None` if unset or unknown.
	pub fn get(&self, colour_set: ColourSetId) -> Option<&BlockId> {
		self.blocks.get(&colour_set)?.as_ref()
	}

	pub fn is_set(&self, colour_set: ColourSetId) -> bool {
		self.get(colour_set).is_some()
	}

	pub fn contains(&self, colour_set: ColourSetId) -> bool {
		self.blocks.contains_key(&colour_set)
	}

	/// All entries in ascending colour set order.
	pub fn iter(&self) -> impl Iterator<Item = (ColourSetId, Option<&BlockId>)> {
		self.blocks.iter().map(|(&id, block)| (id, block.as_ref()))
	}

	/// Set entries only, in ascending colour set order.
	pub fn selected(&self) -> impl Iterator<Item = (ColourSetId, &BlockId)> {
		self.blocks.iter().filter_map(|(&id, block)| Some((id, block.as_ref()?)))
	}

	/// Returns true if no colour set has a block.
	pub fn is_empty(&self) -> bool {
		self.selected().next().is_none()
	}

	/// Number of colour sets tracked, set or not.
	pub fn len(&self) -> usize {
		self.blocks.len()
	}

	/// Pairs for every set entry, ascending by colour set.
	///
	/// Entries whose block the registry does not know are left out.
	pub fn preset_pairs(&self, registry: &ColourRegistry) -> Vec<PresetPair> {
		self.selected()
			.filter_map(|(colour_set, block)| {
				let def = registry.block(colour_set, block).ok()?;
				Some(PresetPair {
					colour_set,
					preset_index: def.preset_index,
				})
			})
			.collect()
	}

	pub(crate) fn slot_mut(&mut self, colour_set: ColourSetId) -> Option<&mut Option<BlockId>> {
		self.blocks.get_mut(&colour_set)
	}

	pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = (ColourSetId, &mut Option<BlockId>)> {
		self.blocks.iter_mut().map(|(&id, block)| (id, block))
	}

	pub(crate) fn clear(&mut self) {
		self.blocks.values_mut().for_each(|block| *block = None);
	}
}
