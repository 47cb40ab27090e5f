//! Supported game versions.

use mapart_primitives::McVersion;

use crate::error::{RegistryError, Result};
use crate::spec::VersionsSpec;

/// A game version the tool can target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedVersion {
	pub mc_version: McVersion,
	/// Data version written into generated schematics.
	pub data_version: u32,
}

/// Supported versions, oldest first. Never empty.
#[derive(Debug, Clone)]
pub struct SupportedVersions {
	versions: Vec<SupportedVersion>,
}

impl SupportedVersions {
	pub fn new(versions: Vec<SupportedVersion>) -> Result<Self> {
		if versions.is_empty() {
			return Err(RegistryError::NoVersions);
		}
		Ok(Self { versions })
	}

	pub fn from_json(json: &str) -> Result<Self> {
		let spec: VersionsSpec = serde_json::from_str(json).map_err(|source| RegistryError::Json { label: "version", source })?;
		Self::from_spec(spec)
	}

	pub fn from_spec(spec: VersionsSpec) -> Result<Self> {
		Self::new(
			spec.into_values()
				.map(|v| SupportedVersion {
					mc_version: McVersion::new(v.mc_version),
					data_version: v.data_version,
				})
				.collect(),
		)
	}

	/// The newest supported version, used when nothing else is configured.
	pub fn latest(&self) -> &SupportedVersion {
		&self.versions[self.versions.len() - 1]
	}

	pub fn find(&self, mc_version: &str) -> Option<&SupportedVersion> {
		self.versions.iter().find(|v| v.mc_version.as_str() == mc_version)
	}

	/// Like [`Self::find`], but unknown versions are an error.
	pub fn resolve(&self, mc_version: &str) -> Result<&SupportedVersion> {
		self.find(mc_version).ok_or_else(|| RegistryError::UnknownVersion(McVersion::new(mc_version)))
	}

	pub fn iter(&self) -> impl Iterator<Item = &SupportedVersion> {
		self.versions.iter()
	}

	#[allow(clippy::len_without_is_empty, reason = "the version list is never empty")]
	pub fn len(&self) -> usize {
		self.versions.len()
	}
}
