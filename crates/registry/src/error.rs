//! Error types for registry construction and lookup.

use mapart_primitives::{BlockId, ColourSetId, McVersion, ParseIdError, PresetIndex};
use thiserror::Error;

/// Errors raised while building or querying a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// Registry data is not valid JSON or does not match the expected shape.
	#[error("{label} data is malformed: {source}")]
	Json {
		/// Which data set failed to parse.
		label: &'static str,
		#[source]
		source: serde_json::Error,
	},

	/// A colour set key is not a decimal integer.
	#[error(transparent)]
	InvalidId(#[from] ParseIdError),

	/// Two blocks of one colour set share a preset index.
	#[error("colour set {colour_set}: blocks {existing} and {new} share preset index {preset_index}")]
	DuplicatePresetIndex {
		colour_set: ColourSetId,
		preset_index: PresetIndex,
		existing: BlockId,
		new: BlockId,
	},

	/// A version alias points at a version the block does not define.
	#[error("colour set {colour_set}, block {block}: version alias {alias:?} does not resolve")]
	DanglingVersionAlias {
		colour_set: ColourSetId,
		block: BlockId,
		alias: String,
	},

	/// A colour set id that is not registered.
	#[error("unknown colour set {0}")]
	UnknownGroup(ColourSetId),

	/// A block id that is not registered in its colour set.
	#[error("colour set {colour_set} has no block {block}")]
	UnknownVariant { colour_set: ColourSetId, block: BlockId },

	/// A version that is not in the supported version list.
	#[error("unsupported version {0}")]
	UnknownVersion(McVersion),

	/// The supported version list is empty.
	#[error("no supported versions defined")]
	NoVersions,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
