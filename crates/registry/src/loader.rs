//! Builtin registry data compiled into the binary.

use crate::colours::ColourRegistry;
use crate::error::Result;
use crate::versions::SupportedVersions;

const COLOURS_JSON: &str = include_str!("../data/colours.json");
const VERSIONS_JSON: &str = include_str!("../data/versions.json");

/// Builds the colour registry shipped with the tool.
pub fn builtin_colours() -> Result<ColourRegistry> {
	ColourRegistry::from_json(COLOURS_JSON)
}

/// Builds the supported version list shipped with the tool.
pub fn builtin_versions() -> Result<SupportedVersions> {
	SupportedVersions::from_json(VERSIONS_JSON)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_data_loads() {
		let colours = builtin_colours().unwrap();
		let versions = builtin_versions().unwrap();
		assert!(!colours.is_empty());
		assert_eq!(versions.latest().mc_version.as_str(), "1.20");
	}

	#[test]
	fn builtin_blocks_only_reference_supported_versions() {
		let colours = builtin_colours().unwrap();
		let versions = builtin_versions().unwrap();
		for set in colours.colour_sets() {
			for block in set.blocks() {
				for version in block.valid_versions() {
					assert!(
						versions.find(version.as_str()).is_some(),
						"colour set {} block {} lists unsupported version {version}",
						set.id,
						block.id
					);
				}
			}
		}
	}

	#[test]
	fn every_builtin_colour_set_has_a_block_in_some_version() {
		let colours = builtin_colours().unwrap();
		for set in colours.colour_sets() {
			assert!(set.blocks().any(|b| b.valid_versions().next().is_some()), "colour set {} is unusable", set.id);
		}
	}
}
