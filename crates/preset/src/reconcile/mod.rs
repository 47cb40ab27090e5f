//! Owner of the live [`Selection`].
//!
//! Every change to the selection goes through [`SelectionReconciler`], which
//! keeps two invariants: every registry colour set has an entry, and a set
//! entry names a block that is valid for the active version. The second is
//! only relaxed by [`SelectionReconciler::set_single`], where the caller's
//! explicit choice is trusted.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use mapart_primitives::{BlockId, ColourSetId, McVersion, PresetPair};
use mapart_registry::{BlockDef, ColourRegistry, RegistryError};

use crate::codec::{self, Decoded};
use crate::error::{CorruptedPreset, Result};
use crate::selection::Selection;

/// What happened when a token was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOutcome {
	/// The token's pairs replaced the selection.
	Applied,
	/// The token is reserved; the selection was not touched.
	Redirect(&'static str),
}

/// Resolves a pair to a block that may be used in `version`.
///
/// `None` when the colour set or preset index is unknown, or the block does
/// not exist in that version.
pub fn resolve_pair<'r>(registry: &'r ColourRegistry, pair: &PresetPair, version: &McVersion) -> Option<&'r BlockDef> {
	let block = registry.find_by_preset_index(pair.colour_set, pair.preset_index)?;
	block.is_valid_in(version).then_some(block)
}

/// Holds the selection together with the registry and active version it is
/// validated against.
#[derive(Debug, Clone)]
pub struct SelectionReconciler {
	registry: Arc<ColourRegistry>,
	version: McVersion,
	selection: Selection,
}

impl SelectionReconciler {
	/// Starts with every colour set unset.
	pub fn new(registry: Arc<ColourRegistry>, version: McVersion) -> Self {
		let selection = Selection::unset(&registry);
		Self {
			registry,
			version,
			selection,
		}
	}

	pub fn registry(&self) -> &Arc<ColourRegistry> {
		&self.registry
	}

	/// The active version.
	pub fn version(&self) -> &McVersion {
		&self.version
	}

	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// Overwrites one colour set's choice. `None` unsets it.
	///
	/// The block is not checked against the active version. Unknown colour
	/// sets and blocks are programming errors and are rejected.
	pub fn set_single(&mut self, colour_set: ColourSetId, block: Option<BlockId>) -> Result<()> {
		if let Some(block) = &block {
			self.registry.block(colour_set, block)?;
		}
		let slot = self.selection.slot_mut(colour_set).ok_or(RegistryError::UnknownGroup(colour_set))?;
		*slot = block;
		Ok(())
	}

	/// Replaces the whole selection with the given pairs.
	///
	/// Starts from all-unset; pairs that do not resolve under the active
	/// version are dropped.
	pub fn apply_pairs<'a>(&mut self, pairs: impl IntoIterator<Item = &'a PresetPair>) {
		self.selection.clear();
		for pair in pairs {
			let Some(block) = resolve_pair(&self.registry, pair, &self.version) else {
				continue;
			};
			if let Some(slot) = self.selection.slot_mut(pair.colour_set) {
				*slot = Some(block.id.clone());
			}
		}
	}

	/// Decodes a token and applies its pairs.
	///
	/// A corrupted token leaves the selection unchanged.
	pub fn apply_token(&mut self, token: &str) -> std::result::Result<TokenOutcome, CorruptedPreset> {
		match codec::decode(token)? {
			Decoded::Pairs(pairs) => {
				self.apply_pairs(&pairs);
				Ok(TokenOutcome::Applied)
			}
			Decoded::Redirect(url) => Ok(TokenOutcome::Redirect(url)),
		}
	}

	/// Switches the active version, unsetting every choice that is not valid
	/// in it. Never sets anything. Returns the number of colour sets unset.
	pub fn on_version_change(&mut self, version: McVersion) -> usize {
		let mut cleared = 0;
		for (colour_set, slot) in self.selection.slots_mut() {
			let Some(block) = slot.as_ref() else {
				continue;
			};
			let valid = self.registry.block(colour_set, block).is_ok_and(|def| def.is_valid_in(&version));
			if !valid {
				*slot = None;
				cleared += 1;
			}
		}
		tracing::debug!(from = %self.version, to = %version, cleared, "active version changed");
		self.version = version;
		cleared
	}

	/// Unsets every colour set.
	pub fn clear(&mut self) {
		self.selection.clear();
	}

	/// Pairs of the current selection, ascending by colour set.
	pub fn preset_pairs(&self) -> Vec<PresetPair> {
		self.selection.preset_pairs(&self.registry)
	}

	/// Token for the current selection.
	pub fn encode(&self) -> String {
		codec::encode_pairs(&self.preset_pairs())
	}
}
