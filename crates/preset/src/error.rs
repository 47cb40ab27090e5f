//! Error types for preset handling.

use std::path::PathBuf;

use mapart_registry::RegistryError;
use thiserror::Error;

/// A token contains characters outside `[0-9a-zA-Z]`.
///
/// The only way decoding a token can fail. Nothing is applied when this is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("corrupted preset: unexpected {found:?} at offset {offset}")]
pub struct CorruptedPreset {
	/// Byte offset of the first offending character.
	pub offset: usize,
	/// The offending character.
	pub found: char,
}

/// Errors that can occur while applying or storing presets.
#[derive(Debug, Error)]
pub enum PresetError {

	/// A direct lookup hit an id the registry does not know.
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// Sharing or exporting with no colour set selected.
	#[error("no colour sets are selected")]
	NothingSelected,

	/// No stored preset has the given name.
	#[error("no preset named {0:?}")]
	PresetNotFound(String),

	/// Stored preset data could not be (de)serialized.
	#[error("preset data is malformed: {0}")]
	Json(#[from] serde_json::Error),

	/// Reading or writing a preset file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// File that was being accessed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;
