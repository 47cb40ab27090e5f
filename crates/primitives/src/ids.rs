use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when an identifier cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {input:?}")]
pub struct ParseIdError {
	/// Which identifier was being parsed.
	pub kind: &'static str,
	/// The rejected input.
	pub input: String,
}

/// Identifier of a colour set (one map colour the tool fills with a block).
///
/// Stable across registry revisions. Decimal in data files, base 36 in
/// preset tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColourSetId(pub u32);

impl ColourSetId {
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for ColourSetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ColourSetId {
	type Err = ParseIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse().map(Self).map_err(|_| ParseIdError {
			kind: "colour set id",
			input: s.to_string(),
		})
	}
}

/// Serialization index of a block within its colour set.
///
/// Unique per colour set. Block ids may be renumbered; preset indices may not,
/// since stored presets and shared links refer to blocks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetIndex(pub u32);

impl PresetIndex {
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for PresetIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Registry-local key of a block inside a colour set. Opaque.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Box<str>);

impl BlockId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for BlockId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for BlockId {
	fn from(s: &str) -> Self {
		Self::new(s)
	}
}

/// A game version identifier such as `"1.20"` or `"1.12.2"`.
///
/// Compared as an opaque string: it is a member key of a block's valid
/// version set, not a semantic version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct McVersion(Box<str>);

impl McVersion {
	pub fn new(version: impl Into<Box<str>>) -> Self {
		Self(version.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for McVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for McVersion {
	fn from(s: &str) -> Self {
		Self::new(s)
	}
}

impl std::borrow::Borrow<str> for McVersion {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl std::borrow::Borrow<str> for BlockId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
