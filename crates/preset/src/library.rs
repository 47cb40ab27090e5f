//! Named presets saved by the user.
//!
//! Presets store `(colour set, preset index)` pairs rather than block ids, so
//! they survive block renumbering. Applying a preset goes through
//! [`SelectionReconciler::apply_pairs`] like a decoded token does.

use std::path::Path;

use mapart_primitives::PresetPair;
use serde::{Deserialize, Serialize};

use crate::error::{PresetError, Result};
use crate::reconcile::SelectionReconciler;

const DEFAULT_PRESETS_JSON: &str = include_str!("../data/default_presets.json");

/// A saved preset.
///
/// Presets that originate from the default table carry their `localeKey`, so
/// a newer default can replace a stale stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreset {
	pub name: String,
	#[serde(rename = "localeKey", default, skip_serializing_if = "Option::is_none")]
	pub locale_key: Option<String>,
	pub blocks: Vec<PresetPair>,
}

/// The presets shipped with the tool.
pub fn default_presets() -> Result<Vec<StoredPreset>> {
	Ok(serde_json::from_str(DEFAULT_PRESETS_JSON)?)
}

/// Stored presets plus the name of the one currently picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetLibrary {
	presets: Vec<StoredPreset>,
	selected: Option<String>,
}

impl PresetLibrary {
	pub fn new(presets: Vec<StoredPreset>) -> Self {
		Self { presets, selected: None }
	}

	/// Builds a library from stored presets, refreshing default presets.
	///
	/// An entry whose `localeKey` matches a default preset is replaced by that
	/// default; every other entry is kept as stored, in order.
	pub fn migrate(loaded: Vec<StoredPreset>, defaults: &[StoredPreset]) -> Self {
		let presets = loaded
			.into_iter()
			.map(|stored| {
				let current = stored
					.locale_key
					.as_deref()
					.and_then(|key| defaults.iter().find(|d| d.locale_key.as_deref() == Some(key)));
				match current {
					Some(default) => default.clone(),
					None => stored,
				}
			})
			.collect();
		Self::new(presets)
	}

	/// Parses a stored preset list and migrates it against `defaults`.
	pub fn from_json(json: &str, defaults: &[StoredPreset]) -> Result<Self> {
		let loaded: Vec<StoredPreset> = serde_json::from_str(json)?;
		Ok(Self::migrate(loaded, defaults))
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.presets)?)
	}

	/// Loads presets from `path`, or starts from `defaults` if it does not exist.
	pub fn load(path: &Path, defaults: &[StoredPreset]) -> Result<Self> {
		match std::fs::read_to_string(path) {
			Ok(json) => Self::from_json(&json, defaults),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::new(defaults.to_vec())),
			Err(error) => Err(PresetError::Io {
				path: path.to_path_buf(),
				error,
			}),
		}
	}

	pub fn store(&self, path: &Path) -> Result<()> {
		std::fs::write(path, self.to_json()?).map_err(|error| PresetError::Io {
			path: path.to_path_buf(),
			error,
		})
	}

	pub fn presets(&self) -> &[StoredPreset] {
		&self.presets
	}

	pub fn into_presets(self) -> Vec<StoredPreset> {
		self.presets
	}

	pub fn find(&self, name: &str) -> Option<&StoredPreset> {
		self.presets.iter().find(|p| p.name == name)
	}

	/// Name of the picked preset; `None` when nothing is picked.
	pub fn selected_name(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Picks a preset and applies it.
	///
	/// `None` clears the selection. A name that is not stored is remembered
	/// but leaves the selection as it was.
	pub fn select(&mut self, name: Option<&str>, reconciler: &mut SelectionReconciler) {
		self.selected = name.map(str::to_string);
		match name {
			None => reconciler.clear(),
			Some(name) => {
				if let Some(preset) = self.find(name) {
					reconciler.apply_pairs(&preset.blocks);
				}
			}
		}
	}

	/// Saves the current selection under `name`, replacing a preset with the
	/// same name, and picks it.
	pub fn save(&mut self, name: &str, reconciler: &SelectionReconciler) -> &StoredPreset {
		self.presets.retain(|p| p.name != name);
		self.presets.push(StoredPreset {
			name: name.to_string(),
			locale_key: None,
			blocks: reconciler.preset_pairs(),
		});
		self.selected = Some(name.to_string());
		tracing::debug!(name, "preset saved");
		&self.presets[self.presets.len() - 1]
	}

	/// Deletes the picked preset and picks nothing.
	///
	/// Returns the removed preset, if the picked name was stored.
	pub fn delete_selected(&mut self) -> Option<StoredPreset> {
		let name = self.selected.take()?;
		self.remove(&name)
	}

	/// Deletes a preset by name.
	pub fn delete(&mut self, name: &str) -> Result<StoredPreset> {
		if self.selected.as_deref() == Some(name) {
			self.selected = None;
		}
		self.remove(name).ok_or_else(|| PresetError::PresetNotFound(name.to_string()))
	}

	fn remove(&mut self, name: &str) -> Option<StoredPreset> {
		let index = self.presets.iter().position(|p| p.name == name)?;
		tracing::debug!(name, "preset deleted");
		Some(self.presets.remove(index))
	}
}
