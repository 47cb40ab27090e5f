//! Subcommand handlers.
//!
//! Handlers write to `out` so they can run against a buffer in tests. They
//! return whether the session changed and should be persisted.

use std::io::Write;

use anyhow::{Context, anyhow, bail};
use mapart_preset::{Decoded, PresetError, decode, encode_pairs, resolve_pair};
use mapart_primitives::PresetPair;
use mapart_session::{LinkOutcome, MapMode, MapartSession, StaircaseMode};

use crate::cli::{Command, MapModeArg, PresetAction, SelectionArgs, token_from_link};

pub fn run(command: &Command, session: &mut MapartSession, out: &mut dyn Write) -> anyhow::Result<bool> {
	match command {
		Command::Encode { pairs } => {
			let pairs: Vec<PresetPair> = pairs.iter().map(|p| p.0).collect();
			writeln!(out, "{}", encode_pairs(&pairs))?;
			Ok(false)
		}
		Command::Decode { link } => {
			decode_link(session, link, out)?;
			Ok(false)
		}
		Command::Share { selection } => {
			apply_selection(session, selection)?;
			writeln!(out, "{}", session.share_url()?)?;
			Ok(false)
		}
		Command::Palette {
			selection,
			mode,
			no_staircasing,
			no_unobtainable,
			output,
		} => {
			apply_selection(session, selection)?;
			let settings = session.settings_mut();
			settings.map_mode = match mode {
				MapModeArg::Nbt => MapMode::SchematicNbt,
				MapModeArg::Mapdat => MapMode::Mapdat,
			};
			if *no_staircasing {
				settings.staircasing = StaircaseMode::Off;
			}
			settings.unobtainable = !no_unobtainable;

			let palette = session.palette()?;
			match output {
				Some(path) => {
					std::fs::write(path, &palette.text).with_context(|| format!("failed to write palette to {}", path.display()))?;
					writeln!(out, "wrote {} colours to {}", palette.colour_count, path.display())?;
				}
				None => out.write_all(palette.text.as_bytes())?,
			}
			Ok(false)
		}
		Command::Preset { action } => run_preset(action, session, out),
		Command::Colours { colour_set } => {
			list_colours(session, *colour_set, out)?;
			Ok(false)
		}
		Command::Versions => {
			let active = session.reconciler().version().clone();
			for version in session.versions().iter() {
				let marker = if version.mc_version == active { '*' } else { ' ' };
				writeln!(out, "{marker} {}\t{}", version.mc_version, version.data_version)?;
			}
			Ok(false)
		}
	}
}

fn run_preset(action: &PresetAction, session: &mut MapartSession, out: &mut dyn Write) -> anyhow::Result<bool> {
	match action {
		PresetAction::List => {
			for preset in session.library().presets() {
				writeln!(out, "{}\t{} blocks", preset.name, preset.blocks.len())?;
			}
			Ok(false)
		}
		PresetAction::Show { name } => {
			ensure_preset(session, name)?;
			session.select_preset(Some(name));
			write_selection(session, out)?;
			match session.share_url() {
				Ok(url) => writeln!(out, "{url}")?,
				Err(mapart_session::SessionError::Preset(PresetError::NothingSelected)) => {
					writeln!(out, "no blocks of this preset exist in {}", session.reconciler().version())?;
				}
				Err(error) => return Err(error.into()),
			}
			Ok(false)
		}
		PresetAction::Save { name, selection } => {
			apply_selection(session, selection)?;
			let saved = session.save_preset(name)?;
			writeln!(out, "saved {:?} with {} blocks", saved.name, saved.blocks.len())?;
			Ok(true)
		}
		PresetAction::Delete { name } => {
			ensure_preset(session, name)?;
			session.select_preset(Some(name));
			let deleted = session.delete_preset().ok_or_else(|| PresetError::PresetNotFound(name.clone()))?;
			writeln!(out, "deleted {:?}", deleted.name)?;
			Ok(true)
		}
	}
}

fn ensure_preset(session: &MapartSession, name: &str) -> anyhow::Result<()> {
	if session.library().find(name).is_none() {
		return Err(PresetError::PresetNotFound(name.to_string()).into());
	}
	Ok(())
}

/// Builds the selection a command operates on.
fn apply_selection(session: &mut MapartSession, args: &SelectionArgs) -> anyhow::Result<()> {
	if let Some(name) = &args.preset {
		ensure_preset(session, name)?;
		session.select_preset(Some(name));
	}
	if let Some(link) = &args.token {
		apply_link(session, link)?;
	}
	for choice in &args.block {
		session.set_block(choice.colour_set, choice.block.clone())?;
	}
	Ok(())
}

fn apply_link(session: &mut MapartSession, link: &str) -> anyhow::Result<()> {
	let token = token_from_link(link).ok_or_else(|| anyhow!("no preset in link {link:?}"))?;
	match session.open_link(&token) {
		LinkOutcome::Applied => Ok(()),
		LinkOutcome::Redirect(url) => bail!("token {token:?} is reserved, see {url}"),
		LinkOutcome::Corrupted { offset, found } => bail!("corrupted preset: unexpected {found:?} at offset {offset}"),
		LinkOutcome::NoToken => bail!("no preset in {token:?}"),
	}
}

fn decode_link(session: &mut MapartSession, link: &str, out: &mut dyn Write) -> anyhow::Result<()> {
	let token = token_from_link(link).ok_or_else(|| anyhow!("no preset in link {link:?}"))?;
	let pairs = match decode(&token)? {
		Decoded::Pairs(pairs) => pairs,
		Decoded::Redirect(url) => {
			writeln!(out, "{url}")?;
			return Ok(());
		}
	};
	apply_link(session, &token)?;
	write_selection(session, out)?;

	let reconciler = session.reconciler();
	let skipped = pairs
		.iter()
		.filter(|pair| resolve_pair(reconciler.registry(), pair, reconciler.version()).is_none())
		.count();
	if skipped > 0 {
		writeln!(
			out,
			"skipped {skipped} of {} records (unknown or not in {})",
			pairs.len(),
			reconciler.version()
		)?;
	}
	Ok(())
}

fn write_selection(session: &MapartSession, out: &mut dyn Write) -> anyhow::Result<()> {
	let registry = session.reconciler().registry();
	for (colour_set, block) in session.reconciler().selection().selected() {
		let def = registry.block(colour_set, block)?;
		let set_name = registry.get(colour_set).map_or("", |set| &*set.name);
		writeln!(out, "{colour_set}\t{set_name}\t{}\t{}", def.preset_index, def.display_name)?;
	}
	Ok(())
}

fn list_colours(session: &MapartSession, only: Option<u32>, out: &mut dyn Write) -> anyhow::Result<()> {
	let registry = session.reconciler().registry();
	let version = session.reconciler().version();
	let mut found = false;
	for set in registry.colour_sets().filter(|set| only.is_none_or(|id| set.id.as_u32() == id)) {
		found = true;
		writeln!(out, "{}\t{}", set.id, set.name)?;
		for block in set.blocks() {
			match block.versioned(version) {
				Some(state) => writeln!(out, "  {}\t{}\t{}", block.preset_index, block.display_name, state.nbt_name)?,
				None => writeln!(out, "  {}\t{}\t(not in {version})", block.preset_index, block.display_name)?,
			}
		}
	}
	if !found && let Some(id) = only {
		bail!("unknown colour set {id}");
	}
	Ok(())
}
