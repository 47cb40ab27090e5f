//! Error types for session operations.

use std::path::PathBuf;

use mapart_preset::PresetError;
use mapart_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
	#[error(transparent)]
	Preset(#[from] PresetError),

	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// Presets need a non-empty name.
	#[error("preset name is empty")]
	EmptyPresetName,

	/// A map setting was given a value outside its range.
	#[error("invalid {setting}: {value}")]
	InvalidSetting {
		/// Name of the setting.
		setting: &'static str,
		/// The rejected value.
		value: String,
	},

	/// Session state could not be (de)serialized.
	#[error("session state is malformed: {0}")]
	Json(#[from] serde_json::Error),

	/// Reading or writing the state file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// File that was being accessed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
