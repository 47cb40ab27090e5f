//! UI events mapped onto the selection, library and settings.

use std::sync::Arc;

use mapart_preset::{CorruptedPreset, Palette, PresetLibrary, SelectionReconciler, StoredPreset, TokenOutcome, export_palette, share_url};
use mapart_primitives::{BlockId, ColourSetId, McVersion};
use mapart_registry::{ColourRegistry, SupportedVersion, SupportedVersions};
use url::Url;

use crate::error::{Result, SessionError};
use crate::settings::MapSettings;
use crate::state::SessionState;

/// Result of applying a token from a share link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
	/// No token was given.
	NoToken,
	/// The token replaced the selection.
	Applied,
	/// The token is reserved and points elsewhere.
	Redirect(&'static str),
	/// The token was corrupted; the selection is unchanged.
	Corrupted { offset: usize, found: char },
}

/// Controller state for one user.
#[derive(Debug, Clone)]
pub struct MapartSession {
	reconciler: SelectionReconciler,
	versions: SupportedVersions,
	library: PresetLibrary,
	defaults: Vec<StoredPreset>,
	settings: MapSettings,
	share_base: Url,
}

impl MapartSession {
	/// A fresh session on the latest version with the default presets.
	pub fn new(registry: Arc<ColourRegistry>, versions: SupportedVersions, defaults: Vec<StoredPreset>, share_base: Url) -> Self {
		let version = versions.latest().mc_version.clone();
		Self {
			reconciler: SelectionReconciler::new(registry, version),
			versions,
			library: PresetLibrary::new(defaults.clone()),
			defaults,
			settings: MapSettings::default(),
			share_base,
		}
	}

	/// Opens a session the way a page load does: restore persisted state,
	/// then apply the link token under the restored version.
	pub fn open(
		registry: Arc<ColourRegistry>, versions: SupportedVersions, defaults: Vec<StoredPreset>, share_base: Url, state: Option<SessionState>,
		token: Option<&str>,
	) -> (Self, LinkOutcome) {
		let mut session = Self::new(registry, versions, defaults, share_base);
		if let Some(state) = state {
			session.restore(state);
		}
		let outcome = match token {
			Some(token) => session.open_link(token),
			None => LinkOutcome::NoToken,
		};
		(session, outcome)
	}

	/// Restores persisted state. An unsupported stored version falls back to
	/// the latest one; stored presets are migrated against the defaults.
	pub fn restore(&mut self, state: SessionState) {
		let version = match state.mcversion.as_deref().and_then(|v| self.versions.find(v)) {
			Some(found) => found.mc_version.clone(),
			None => {
				if let Some(stored) = &state.mcversion {
					tracing::debug!(stored, "stored version unsupported, using latest");
				}
				self.versions.latest().mc_version.clone()
			}
		};
		self.reconciler.on_version_change(version);
		self.library = match state.presets {
			Some(presets) => PresetLibrary::migrate(presets, &self.defaults),
			None => PresetLibrary::new(self.defaults.clone()),
		};
	}

	/// Applies a token from a share link.
	pub fn open_link(&mut self, token: &str) -> LinkOutcome {
		match self.reconciler.apply_token(token) {
			Ok(TokenOutcome::Applied) => LinkOutcome::Applied,
			Ok(TokenOutcome::Redirect(url)) => LinkOutcome::Redirect(url),
			Err(CorruptedPreset { offset, found }) => {
				tracing::warn!(offset, %found, "corrupted preset in link");
				LinkOutcome::Corrupted { offset, found }
			}
		}
	}

	/// The user picked a block for a colour set, or cleared it.
	pub fn set_block(&mut self, colour_set: ColourSetId, block: Option<BlockId>) -> Result<()> {
		Ok(self.reconciler.set_single(colour_set, block)?)
	}

	/// Switches the target version. Returns how many choices were cleared.
	pub fn change_version(&mut self, mc_version: &str) -> Result<usize> {
		let version = self.versions.resolve(mc_version)?.mc_version.clone();
		Ok(self.reconciler.on_version_change(version))
	}

	/// Picks a stored preset, or clears the selection with `None`.
	pub fn select_preset(&mut self, name: Option<&str>) {
		self.library.select(name, &mut self.reconciler);
	}

	/// Saves the selection as a preset.
	pub fn save_preset(&mut self, name: &str) -> Result<&StoredPreset> {
		let name = name.trim();
		if name.is_empty() {
			return Err(SessionError::EmptyPresetName);
		}
		Ok(self.library.save(name, &self.reconciler))
	}

	/// Deletes the picked preset.
	pub fn delete_preset(&mut self) -> Option<StoredPreset> {
		self.library.delete_selected()
	}

	/// Link that reproduces the selection.
	pub fn share_url(&self) -> Result<Url> {
		Ok(share_url(&self.share_base, &self.reconciler)?)
	}

	/// paint.net palette for the selection under the current settings.
	pub fn palette(&self) -> Result<Palette> {
		Ok(export_palette(&self.reconciler, &self.share_base, self.settings.palette_options())?)
	}

	/// State to persist between runs.
	pub fn snapshot(&self) -> SessionState {
		SessionState {
			mcversion: Some(self.reconciler.version().to_string()),
			presets: Some(self.library.presets().to_vec()),
		}
	}

	pub fn reconciler(&self) -> &SelectionReconciler {
		&self.reconciler
	}

	pub fn library(&self) -> &PresetLibrary {
		&self.library
	}

	pub fn versions(&self) -> &SupportedVersions {
		&self.versions
	}

	/// The active version with its data version.
	pub fn active_version(&self) -> &SupportedVersion {
		let active: &McVersion = self.reconciler.version();
		self.versions.find(active.as_str()).unwrap_or_else(|| self.versions.latest())
	}

	pub fn settings(&self) -> &MapSettings {
		&self.settings
	}

	pub fn settings_mut(&mut self) -> &mut MapSettings {
		&mut self.settings
	}

	pub fn share_base(&self) -> &Url {
		&self.share_base
	}
}

#[cfg(test)]
mod tests;
