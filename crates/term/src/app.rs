//! Session bootstrap: config, registry data and persisted state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use mapart_config::Config;
use mapart_preset::{DEFAULT_SHARE_BASE, default_presets};
use mapart_registry::{ColourRegistry, builtin_colours, builtin_versions};
use mapart_session::{MapartSession, SessionState};
use url::Url;

/// An open session and where to persist it.
pub struct App {
	pub session: MapartSession,
	pub state_path: Option<PathBuf>,
}

impl App {
	/// Builds the session from configuration and the state file.
	///
	/// `state_override` replaces the configured state path. `mc_version`
	/// switches the target version after restoring.
	pub fn open(config: &Config, state_override: Option<&Path>, mc_version: Option<&str>) -> anyhow::Result<Self> {
		let registry = match &config.colours_path {
			Some(path) => load_colours(path)?,
			None => builtin_colours().context("builtin colour data is invalid")?,
		};
		let versions = builtin_versions().context("builtin version data is invalid")?;
		let defaults = default_presets().context("builtin presets are invalid")?;

		let base = config.share_base_url.as_deref().unwrap_or(DEFAULT_SHARE_BASE);
		let share_base = Url::parse(base).with_context(|| format!("invalid share base URL {base:?}"))?;

		let state_path = state_override.map(Path::to_path_buf).or_else(|| config.resolved_state_path());
		let state = match &state_path {
			Some(path) => SessionState::load(path).with_context(|| format!("failed to read state from {}", path.display()))?,
			None => None,
		};
		let has_stored_version = state
			.as_ref()
			.and_then(|s| s.mcversion.as_deref())
			.is_some_and(|v| versions.find(v).is_some());

		let (mut session, _) = MapartSession::open(Arc::new(registry), versions, defaults, share_base, state, None);
		if !has_stored_version && let Some(version) = &config.default_version {
			session.change_version(version).context("configured default_version is not supported")?;
		}
		if let Some(version) = mc_version {
			session.change_version(version)?;
		}
		tracing::debug!(version = %session.reconciler().version(), state = ?state_path, "session opened");

		Ok(Self { session, state_path })
	}

	/// Writes the session state, if a state path is known.
	pub fn persist(&self) -> anyhow::Result<()> {
		let Some(path) = &self.state_path else {
			tracing::warn!("no state path; changes are not saved");
			return Ok(());
		};
		self.session
			.snapshot()
			.store(path)
			.with_context(|| format!("failed to write state to {}", path.display()))
	}
}

fn load_colours(path: &Path) -> anyhow::Result<ColourRegistry> {
	let json = std::fs::read_to_string(path).with_context(|| format!("failed to read colours from {}", path.display()))?;
	ColourRegistry::from_json(&json).with_context(|| format!("invalid colour data in {}", path.display()))
}
