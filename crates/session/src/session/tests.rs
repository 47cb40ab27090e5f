use std::sync::Arc;

use mapart_preset::{DEFAULT_SHARE_BASE, PresetError, StoredPreset, default_presets};
use mapart_primitives::{BlockId, ColourSetId, PresetPair};
use mapart_registry::{builtin_colours, builtin_versions};
use pretty_assertions::assert_eq;

use super::*;
use crate::settings::{MapMode, StaircaseMode};

fn open(state: Option<SessionState>, token: Option<&str>) -> (MapartSession, LinkOutcome) {
	MapartSession::open(
		Arc::new(builtin_colours().unwrap()),
		builtin_versions().unwrap(),
		default_presets().unwrap(),
		Url::parse(DEFAULT_SHARE_BASE).unwrap(),
		state,
		token,
	)
}

fn fresh() -> MapartSession {
	open(None, None).0
}

fn on_version(version: &str) -> SessionState {
	SessionState {
		mcversion: Some(version.into()),
		presets: None,
	}
}

fn selected(session: &MapartSession) -> Vec<(u32, String)> {
	session
		.reconciler()
		.selection()
		.selected()
		.map(|(id, block)| (id.as_u32(), block.to_string()))
		.collect()
}

#[test]
fn fresh_session_uses_latest_version_and_defaults() {
	let session = fresh();
	assert_eq!(session.reconciler().version().as_str(), "1.20");
	assert_eq!(session.active_version().data_version, 3463);
	assert_eq!(session.library().presets(), default_presets().unwrap().as_slice());
	assert!(session.reconciler().selection().is_empty());
}

#[test]
fn open_applies_link_under_restored_version() {
	let (session, outcome) = open(Some(on_version("1.20")), Some("5T"));
	assert_eq!(outcome, LinkOutcome::Applied);
	assert_eq!(selected(&session), vec![(5, "3".to_string())]);

	// The lantern does not exist yet in 1.12.2.
	let (session, outcome) = open(Some(on_version("1.12.2")), Some("5T"));
	assert_eq!(outcome, LinkOutcome::Applied);
	assert!(session.reconciler().selection().is_empty());
}

#[test]
fn unsupported_stored_version_falls_back_to_latest() {
	let (session, _) = open(Some(on_version("1.99")), None);
	assert_eq!(session.reconciler().version().as_str(), "1.20");
}

#[test]
fn corrupted_link_is_reported_and_ignored() {
	let (session, outcome) = open(None, Some("0Q-1R"));
	assert_eq!(outcome, LinkOutcome::Corrupted { offset: 2, found: '-' });
	assert!(session.reconciler().selection().is_empty());
}

#[test]
fn corrupted_link_keeps_existing_selection() {
	let mut session = fresh();
	session.set_block(ColourSetId(0), Some(BlockId::from("1"))).unwrap();

	assert_eq!(session.open_link("5Q?"), LinkOutcome::Corrupted { offset: 2, found: '?' });
	assert_eq!(selected(&session), vec![(0, "1".to_string())]);

	assert_eq!(session.open_link("5Q"), LinkOutcome::Applied);
	assert_eq!(selected(&session), vec![(5, "0".to_string())]);
}

#[test]
fn reserved_link_redirects() {
	let (session, outcome) = open(None, Some("dQw4w9WgXcQ"));
	assert!(matches!(outcome, LinkOutcome::Redirect(_)));
	assert!(session.reconciler().selection().is_empty());
}

#[test]
fn stored_presets_are_migrated() {
	let stale = StoredPreset {
		name: "Everything (old)".into(),
		locale_key: Some("BLOCK-SELECTION/PRESETS/EVERYTHING".into()),
		blocks: vec![PresetPair::new(0, 0)],
	};
	let mine = StoredPreset {
		name: "mine".into(),
		locale_key: None,
		blocks: vec![PresetPair::new(3, 1)],
	};
	let state = SessionState {
		mcversion: None,
		presets: Some(vec![stale, mine.clone()]),
	};

	let (session, _) = open(Some(state), None);
	let presets = session.library().presets();
	assert_eq!(presets.len(), 2);
	assert_eq!(presets[0], default_presets().unwrap()[0]);
	assert_eq!(presets[1], mine);
}

#[test]
fn version_change_prunes_invalid_choices() {
	let mut session = fresh();
	session.set_block(ColourSetId(5), Some(BlockId::from("3"))).unwrap();
	session.set_block(ColourSetId(0), Some(BlockId::from("1"))).unwrap();

	assert_eq!(session.change_version("1.13.2").unwrap(), 1);
	assert_eq!(selected(&session), vec![(0, "1".to_string())]);

	// Going back does not restore the lantern.
	assert_eq!(session.change_version("1.20").unwrap(), 0);
	assert_eq!(selected(&session), vec![(0, "1".to_string())]);
}

#[test]
fn unknown_version_is_rejected() {
	let mut session = fresh();
	assert!(matches!(session.change_version("b1.7.3"), Err(SessionError::Registry(_))));
	assert_eq!(session.reconciler().version().as_str(), "1.20");
}

#[test]
fn unknown_block_is_rejected() {
	let mut session = fresh();
	let err = session.set_block(ColourSetId(5), Some(BlockId::from("99"))).unwrap_err();
	assert!(matches!(err, SessionError::Preset(PresetError::Registry(_))));
}

#[test]
fn selecting_a_preset_filters_by_version() {
	let mut session = fresh();
	session.change_version("1.12.2").unwrap();
	session.select_preset(Some("Everything"));

	assert_eq!(session.library().selected_name(), Some("Everything"));
	// Mushroom stem, crimson nylium, deepslate, raw iron and froglight are newer.
	assert_eq!(session.reconciler().selection().selected().count(), 14);

	session.select_preset(None);
	assert!(session.reconciler().selection().is_empty());
}

#[test]
fn save_share_and_delete() {
	let mut session = fresh();
	session.set_block(ColourSetId(29), Some(BlockId::from("2"))).unwrap();
	session.set_block(ColourSetId(5), Some(BlockId::from("0"))).unwrap();

	let saved = session.save_preset("  dark  ").unwrap();
	assert_eq!(saved.name, "dark");
	assert_eq!(saved.blocks, vec![PresetPair::new(5, 0), PresetPair::new(29, 2)]);
	assert_eq!(session.share_url().unwrap().as_str(), "https://rebane2001.com/mapartcraft/?preset=5QtS");

	let deleted = session.delete_preset().unwrap();
	assert_eq!(deleted.name, "dark");
	assert_eq!(session.library().selected_name(), None);
	assert!(session.library().find("dark").is_none());
}

#[test]
fn blank_preset_name_is_rejected() {
	let mut session = fresh();
	assert!(matches!(session.save_preset(" "), Err(SessionError::EmptyPresetName)));
}

#[test]
fn share_and_palette_need_a_selection() {
	let session = fresh();
	assert!(matches!(session.share_url(), Err(SessionError::Preset(PresetError::NothingSelected))));
	assert!(matches!(session.palette(), Err(SessionError::Preset(PresetError::NothingSelected))));
}

#[test]
fn palette_follows_settings() {
	let mut session = fresh();
	session.set_block(ColourSetId(3), Some(BlockId::from("0"))).unwrap();
	assert_eq!(session.palette().unwrap().colour_count, 3);

	session.settings_mut().map_mode = MapMode::Mapdat;
	assert_eq!(session.palette().unwrap().colour_count, 4);

	session.settings_mut().staircasing = StaircaseMode::Off;
	assert_eq!(session.palette().unwrap().colour_count, 1);
}

#[test]
fn snapshot_round_trips_through_restore() {
	let mut session = fresh();
	session.change_version("1.16.5").unwrap();
	session.set_block(ColourSetId(0), Some(BlockId::from("0"))).unwrap();
	session.save_preset("grass").unwrap();

	let (restored, _) = open(Some(session.snapshot()), None);
	assert_eq!(restored.reconciler().version().as_str(), "1.16.5");
	assert_eq!(restored.library().presets(), session.library().presets());
}
