//! CLI schema and parsing helpers for the mapart binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mapart_preset::token_from_url;
use mapart_primitives::{BlockId, ColourSetId, PresetPair};
use url::Url;

/// A colour set choice given on the command line.
///
/// Supports:
/// * `5:3` - colour set 5, block `3`
/// * `5:-` - colour set 5, nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockChoice {
	pub colour_set: ColourSetId,
	pub block: Option<BlockId>,
}

impl FromStr for BlockChoice {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (set, block) = s.split_once(':').ok_or_else(|| format!("expected <colour set>:<block>, got {s:?}"))?;
		let colour_set = set.parse::<ColourSetId>().map_err(|e| e.to_string())?;
		let block = match block {
			"-" => None,
			"" => return Err(format!("missing block in {s:?}")),
			id => Some(BlockId::from(id)),
		};
		Ok(Self { colour_set, block })
	}
}

/// A `(colour set, preset index)` pair written `5:0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairArg(pub PresetPair);

impl FromStr for PairArg {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (set, index) = s.split_once(':').ok_or_else(|| format!("expected <colour set>:<preset index>, got {s:?}"))?;
		let set = set.parse::<u32>().map_err(|_| format!("invalid colour set in {s:?}"))?;
		let index = index.parse::<u32>().map_err(|_| format!("invalid preset index in {s:?}"))?;
		Ok(Self(PresetPair::new(set, index)))
	}
}

/// Extracts a preset token from a share link, or returns the input if it is
/// a bare token.
pub fn token_from_link(link: &str) -> Option<String> {
	if link.starts_with("http://") || link.starts_with("https://") {
		return Url::parse(link).ok().as_ref().and_then(token_from_url);
	}
	Some(link.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "mapart")]
#[command(about = "Block presets and share links for map art")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Target game version (e.g., 1.20, 1.12.2); remembered for later runs
	#[arg(long, short = 'm', global = true)]
	pub mc_version: Option<String>,

	/// Config file (defaults to $XDG_CONFIG_HOME/mapart/config.toml)
	#[arg(long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// State file holding the version and saved presets
	#[arg(long, value_name = "PATH", global = true)]
	pub state: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Where the selection of a command comes from. Applied in order: preset,
/// then token, then individual blocks.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
	/// Start from a saved preset
	#[arg(long, short = 'p')]
	pub preset: Option<String>,

	/// Start from a token or share link
	#[arg(long, short = 't')]
	pub token: Option<String>,

	/// Set one colour set (e.g., 5:3, or 5:- to clear it); repeatable
	#[arg(long, short = 'b', value_name = "SET:BLOCK")]
	pub block: Vec<BlockChoice>,
}

/// Map output format, for palette shades.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapModeArg {
	Nbt,
	Mapdat,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Encode preset pairs into a token
	Encode {
		/// Pairs written <colour set>:<preset index>
		#[arg(required = true, value_name = "SET:INDEX")]
		pairs: Vec<PairArg>,
	},
	/// Show the blocks a token or share link selects
	Decode {
		/// Token or share link
		link: String,
	},
	/// Print a share link for a selection
	Share {
		#[command(flatten)]
		selection: SelectionArgs,
	},
	/// Write a paint.net palette for a selection
	Palette {
		#[command(flatten)]
		selection: SelectionArgs,

		/// Map output format
		#[arg(long, value_enum, default_value = "nbt")]
		mode: MapModeArg,

		/// Flat map: only the normal shade
		#[arg(long)]
		no_staircasing: bool,

		/// Leave out the unobtainable shade in mapdat mode
		#[arg(long)]
		no_unobtainable: bool,

		/// Write to a file instead of stdout
		#[arg(long, short = 'o', value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// Manage saved presets
	Preset {
		/// Preset subcommand action.
		#[command(subcommand)]
		action: PresetAction,
	},
	/// List colour sets and their blocks for the target version
	Colours {
		/// Only this colour set
		colour_set: Option<u32>,
	},
	/// List supported game versions
	Versions,
}

/// Preset management subcommands.
#[derive(Subcommand, Debug)]
pub enum PresetAction {
	/// List saved presets
	List,
	/// Show the blocks of a saved preset and its share link
	Show {
		name: String,
	},
	/// Save a selection under a name, replacing one with the same name
	Save {
		name: String,
		#[command(flatten)]
		selection: SelectionArgs,
	},
	/// Delete a saved preset
	Delete {
		name: String,
	},
}
