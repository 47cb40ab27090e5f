use std::sync::Arc;

use mapart_primitives::{BlockId, ColourSetId, McVersion, PresetPair};
use mapart_registry::ColourRegistry;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::error::{CorruptedPreset, PresetError};

const REGISTRY: &str = r#"{
	"0": {
		"colourName": "GRASS",
		"tonesRGB": { "dark": [89, 125, 39], "normal": [109, 153, 48], "light": [127, 178, 56], "unobtainable": [67, 94, 29] },
		"blocks": {
			"0": { "displayName": "Grass Block", "presetIndex": 0, "validVersions": { "1.12.2": { "NBTName": "grass" }, "1.20": { "NBTName": "grass_block" } } },
			"1": { "displayName": "Slime Block", "presetIndex": 1, "validVersions": { "1.12.2": { "NBTName": "slime" }, "1.20": { "NBTName": "slime_block" } } }
		}
	},
	"5": {
		"colourName": "METAL",
		"tonesRGB": { "dark": [117, 117, 117], "normal": [144, 144, 144], "light": [167, 167, 167], "unobtainable": [88, 88, 88] },
		"blocks": {
			"0": { "displayName": "Block of Iron", "presetIndex": 0, "validVersions": { "1.12.2": { "NBTName": "iron_block" }, "1.20": "&1.12.2" } },
			"3": { "displayName": "Lantern", "presetIndex": 12, "validVersions": { "1.20": { "NBTName": "lantern" } } }
		}
	},
	"58": {
		"colourName": "DEEPSLATE",
		"tonesRGB": { "dark": [70, 70, 70], "normal": [86, 86, 86], "light": [100, 100, 100], "unobtainable": [52, 52, 52] },
		"blocks": {
			"0": { "displayName": "Cobbled Deepslate", "presetIndex": 0, "validVersions": { "1.20": { "NBTName": "cobbled_deepslate" } } }
		}
	}
}"#;

fn registry() -> Arc<ColourRegistry> {
	Arc::new(ColourRegistry::from_json(REGISTRY).unwrap())
}

fn reconciler(version: &str) -> SelectionReconciler {
	SelectionReconciler::new(registry(), McVersion::from(version))
}

fn chosen(reconciler: &SelectionReconciler) -> Vec<(u32, String)> {
	reconciler
		.selection()
		.selected()
		.map(|(id, block)| (id.as_u32(), block.to_string()))
		.collect()
}

#[test]
fn starts_with_every_colour_set_unset() {
	let r = reconciler("1.20");
	assert_eq!(r.selection().len(), 3);
	assert!(r.selection().is_empty());
	assert!(r.selection().contains(ColourSetId(58)));
}

#[test]
fn set_single_skips_version_check() {
	let mut r = reconciler("1.12.2");
	r.set_single(ColourSetId(58), Some(BlockId::from("0"))).unwrap();
	assert_eq!(chosen(&r), vec![(58, "0".to_string())]);

	r.set_single(ColourSetId(58), None).unwrap();
	assert!(r.selection().is_empty());
}

#[test]
fn set_single_rejects_unknown_ids() {
	let mut r = reconciler("1.20");
	assert!(matches!(
		r.set_single(ColourSetId(7), None),
		Err(PresetError::Registry(RegistryError::UnknownGroup(ColourSetId(7))))
	));
	assert!(matches!(
		r.set_single(ColourSetId(5), Some(BlockId::from("9"))),
		Err(PresetError::Registry(RegistryError::UnknownVariant { .. }))
	));
	assert_eq!(r.selection().len(), 3);
}

#[test]
fn apply_pairs_replaces_selection() {
	let mut r = reconciler("1.20");
	r.set_single(ColourSetId(0), Some(BlockId::from("1"))).unwrap();
	r.apply_pairs(&[PresetPair::new(5, 12)]);
	assert_eq!(chosen(&r), vec![(5, "3".to_string())]);
}

#[test]
fn apply_pairs_drops_unresolvable_pairs() {
	let mut r = reconciler("1.12.2");
	r.apply_pairs(&[
		PresetPair::new(0, 1),
		PresetPair::new(7, 0),
		PresetPair::new(5, 4),
		PresetPair::new(58, 0),
		PresetPair::new(5, 0),
	]);
	assert_eq!(chosen(&r), vec![(0, "1".to_string()), (5, "0".to_string())]);
}

#[test]
fn later_pair_for_same_colour_set_wins() {
	let mut r = reconciler("1.20");
	r.apply_pairs(&[PresetPair::new(5, 0), PresetPair::new(5, 12)]);
	assert_eq!(chosen(&r), vec![(5, "3".to_string())]);
}

#[test]
fn version_change_clears_only_invalid_choices() {
	let mut r = reconciler("1.20");
	r.apply_pairs(&[PresetPair::new(0, 0), PresetPair::new(5, 12), PresetPair::new(58, 0)]);
	assert_eq!(r.selection().selected().count(), 3);

	let cleared = r.on_version_change(McVersion::from("1.12.2"));
	assert_eq!(cleared, 2);
	assert_eq!(r.version().as_str(), "1.12.2");
	assert_eq!(chosen(&r), vec![(0, "0".to_string())]);

	assert_eq!(r.on_version_change(McVersion::from("1.20")), 0);
	assert_eq!(chosen(&r), vec![(0, "0".to_string())]);
}

#[test]
fn version_change_prunes_unchecked_single_choice() {
	let mut r = reconciler("1.12.2");
	r.set_single(ColourSetId(58), Some(BlockId::from("0"))).unwrap();
	assert_eq!(r.on_version_change(McVersion::from("1.12.2")), 1);
	assert!(r.selection().is_empty());
}

#[test]
fn encodes_metal_example() {
	let mut r = reconciler("1.20");
	r.set_single(ColourSetId(5), Some(BlockId::from("0"))).unwrap();
	assert_eq!(r.encode(), "5Q");

	let mut fresh = reconciler("1.20");
	assert_eq!(fresh.apply_token("5Q").unwrap(), TokenOutcome::Applied);
	assert_eq!(fresh.selection(), r.selection());
}

#[test]
fn token_invalid_in_version_leaves_everything_unset() {
	let mut r = reconciler("1.12.2");
	r.apply_token("1mQ").unwrap();
	assert!(r.selection().is_empty());
	assert_eq!(r.selection().len(), 3);
}

#[test]
fn corrupted_token_keeps_selection() {
	let mut r = reconciler("1.20");
	r.apply_token("0R5C").unwrap();
	let before = r.selection().clone();
	assert!(matches!(r.apply_token("0Q/5Q"), Err(CorruptedPreset { offset: 2, found: '/' })));
	assert_eq!(r.selection(), &before);
}

#[test]
fn reserved_token_keeps_selection() {
	let mut r = reconciler("1.20");
	r.apply_token("5Q").unwrap();
	let outcome = r.apply_token(crate::codec::EASTER_EGG_TOKEN).unwrap();
	assert!(matches!(outcome, TokenOutcome::Redirect(_)));
	assert_eq!(chosen(&r), vec![(5, "0".to_string())]);
}

#[test]
fn unknown_colour_set_in_token_is_ignored() {
	let mut with_unknown = reconciler("1.20");
	with_unknown.apply_token("0R7Q5C").unwrap();
	let mut without = reconciler("1.20");
	without.apply_token("0R5C").unwrap();
	assert_eq!(with_unknown.selection(), without.selection());
}

#[test]
fn encoding_lists_colour_sets_in_ascending_order() {
	let mut r = reconciler("1.20");
	r.apply_pairs(&[PresetPair::new(58, 0), PresetPair::new(0, 1), PresetPair::new(5, 12)]);
	assert_eq!(r.preset_pairs(), vec![PresetPair::new(0, 1), PresetPair::new(5, 12), PresetPair::new(58, 0)]);
	assert_eq!(r.encode(), "0R5C1mQ");
}

fn arb_version() -> impl Strategy<Value = McVersion> {
	prop_oneof![Just(McVersion::from("1.12.2")), Just(McVersion::from("1.20")), Just(McVersion::from("1.8.9"))]
}

fn arb_pairs() -> impl Strategy<Value = Vec<PresetPair>> {
	let colour_sets = prop_oneof![Just(0u32), Just(5), Just(7), Just(58), 0u32..100];
	let indices = prop_oneof![Just(0u32), Just(1), Just(12), 0u32..30];
	proptest::collection::vec((colour_sets, indices).prop_map(|(s, i)| PresetPair::new(s, i)), 0..12)
}

proptest! {
	#[test]
	fn prop_apply_pairs_is_idempotent(pairs in arb_pairs(), version in arb_version()) {
		let mut r = SelectionReconciler::new(registry(), version);
		r.apply_pairs(&pairs);
		let once = r.selection().clone();
		r.apply_pairs(&pairs);
		prop_assert_eq!(r.selection(), &once);

		let derived = r.preset_pairs();
		r.apply_pairs(&derived);
		prop_assert_eq!(r.selection(), &once);
	}

	#[test]
	fn prop_selection_roundtrips_through_token(pairs in arb_pairs(), version in arb_version()) {
		let mut r = SelectionReconciler::new(registry(), version.clone());
		r.apply_pairs(&pairs);
		let token = r.encode();

		let mut decoded = SelectionReconciler::new(registry(), version);
		decoded.apply_token(&token).unwrap();
		prop_assert_eq!(decoded.selection(), r.selection());
	}

	#[test]
	fn prop_version_change_only_clears(pairs in arb_pairs(), from in arb_version(), to in arb_version()) {
		let mut r = SelectionReconciler::new(registry(), from);
		r.apply_pairs(&pairs);
		let before = r.selection().clone();
		r.on_version_change(to.clone());

		for (id, block) in r.selection().selected() {
			prop_assert_eq!(before.get(id), Some(block));
			prop_assert!(r.registry().block(id, block).unwrap().is_valid_in(&to));
		}
		prop_assert_eq!(r.selection().len(), before.len());
	}

	#[test]
	fn prop_unknown_colour_sets_do_not_matter(pairs in arb_pairs(), version in arb_version()) {
		let registry = registry();
		let known: Vec<PresetPair> = pairs.iter().copied().filter(|p| registry.contains(p.colour_set)).collect();
		let mut all = SelectionReconciler::new(registry.clone(), version.clone());
		all.apply_pairs(&pairs);
		let mut filtered = SelectionReconciler::new(registry, version);
		filtered.apply_pairs(&known);
		prop_assert_eq!(all.selection(), filtered.selection());
	}
}
