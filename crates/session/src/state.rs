//! State persisted between runs.

use std::path::Path;

use mapart_preset::StoredPreset;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// The active version and the stored presets.
///
/// Both fields may be missing from older files; the session falls back to
/// the latest version and the default presets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mcversion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub presets: Option<Vec<StoredPreset>>,
}

impl SessionState {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Reads state from `path`; `None` if the file does not exist.
	pub fn load(path: &Path) -> Result<Option<Self>> {
		match std::fs::read_to_string(path) {
			Ok(json) => Self::from_json(&json).map(Some),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(error) => Err(SessionError::Io {
				path: path.to_path_buf(),
				error,
			}),
		}
	}

	/// Writes state to `path`, creating parent directories.
	pub fn store(&self, path: &Path) -> Result<()> {
		let io = |error| SessionError::Io {
			path: path.to_path_buf(),
			error,
		};
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			std::fs::create_dir_all(parent).map_err(io)?;
		}
		std::fs::write(path, self.to_json()?).map_err(io)?;
		tracing::debug!(path = %path.display(), "session state stored");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use mapart_primitives::PresetPair;
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn reads_stored_layout() {
		let state = SessionState::from_json(r#"{ "mcversion": "1.16.5", "presets": [{ "name": "mine", "blocks": [[0, 1], [5, 0]] }] }"#).unwrap();
		assert_eq!(state.mcversion.as_deref(), Some("1.16.5"));
		assert_eq!(state.presets.unwrap()[0].blocks, vec![PresetPair::new(0, 1), PresetPair::new(5, 0)]);
	}

	#[test]
	fn missing_fields_are_none() {
		assert_eq!(SessionState::from_json("{}").unwrap(), SessionState::default());
	}

	#[test]
	fn missing_file_is_none() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(SessionState::load(&dir.path().join("state.json")).unwrap(), None);
	}

	#[test]
	fn store_creates_parent_directories() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("state.json");
		let state = SessionState {
			mcversion: Some("1.20".into()),
			presets: Some(Vec::new()),
		};

		state.store(&path).unwrap();
		assert_eq!(SessionState::load(&path).unwrap(), Some(state));
	}

	#[test]
	fn malformed_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("state.json");
		std::fs::write(&path, "{ not json").unwrap();
		assert!(matches!(SessionState::load(&path), Err(SessionError::Json(_))));
	}
}
