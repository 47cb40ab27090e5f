//! Configuration for the mapart tools.
//!
//! Configuration is a single optional TOML file:
//!
//! 1. `$MAPART_CONFIG_DIR/config.toml` if the variable is set
//! 2. `$XDG_CONFIG_HOME/mapart/config.toml` (or the platform equivalent)
//!
//! Every key is optional; a missing file is the same as an empty one.
//!
//! ```toml
//! share_base_url = "https://rebane2001.com/mapartcraft/"
//! default_version = "1.20"
//! state_path = "/home/me/.local/share/mapart/state.json"
//! colours_path = "/home/me/mapart/colours.json"
//! ```

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Directory name used under the platform config and data directories.
pub const APP_DIR: &str = "mapart";
/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";
/// Persisted session state file name.
pub const STATE_FILE: &str = "state.json";

/// Parsed user configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Base URL that share links point at.
	pub share_base_url: Option<String>,
	/// Game version used when no state has been persisted yet.
	pub default_version: Option<String>,
	/// Where session state (version, presets) is persisted.
	pub state_path: Option<PathBuf>,
	/// Colour registry replacing the built-in one.
	pub colours_path: Option<PathBuf>,
}

impl Config {
	/// Parses configuration from TOML text.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from `path`. A missing file yields the defaults.
	pub fn load(path: &Path) -> Result<Self> {
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "no config file, using defaults");
				return Ok(Self::default());
			}
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		let config = Self::parse(&content)?;
		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Loads configuration from the default location, if one can be resolved.
	pub fn load_default() -> Result<Self> {
		match config_path() {
			Some(path) => Self::load(&path),
			None => Ok(Self::default()),
		}
	}

	/// Configured state path, falling back to [`default_state_path`].
	pub fn resolved_state_path(&self) -> Option<PathBuf> {
		self.state_path.clone().or_else(default_state_path)
	}

	fn validate(&self) -> Result<()> {
		if let Some(url) = &self.share_base_url
			&& !(url.starts_with("https://") || url.starts_with("http://"))
		{
			return Err(ConfigError::InvalidValue {
				field: "share_base_url",
				value: url.clone(),
			});
		}
		if let Some(version) = &self.default_version
			&& version.trim().is_empty()
		{
			return Err(ConfigError::InvalidValue {
				field: "default_version",
				value: version.clone(),
			});
		}
		Ok(())
	}
}

/// Directory holding the configuration file.
pub fn config_dir() -> Option<PathBuf> {
	if let Some(dir) = std::env::var_os("MAPART_CONFIG_DIR") {
		return Some(PathBuf::from(dir));
	}
	dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Path of the configuration file.
pub fn config_path() -> Option<PathBuf> {
	config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Default location of the persisted session state.
pub fn default_state_path() -> Option<PathBuf> {
	dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(STATE_FILE))
}

#[cfg(test)]
mod tests;
