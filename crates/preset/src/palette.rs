//! paint.net palette export of the selected colours.

use std::fmt::Write as _;

use mapart_registry::Tone;
use url::Url;

use crate::error::{PresetError, Result};
use crate::reconcile::SelectionReconciler;
use crate::share::url_for_token;

/// paint.net only reads this many palette entries.
pub const MAX_PALETTE_COLOURS: usize = 96;

/// Which shades the palette should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteOptions {
	/// Staircasing makes the dark and light shades reachable.
	pub staircasing: bool,
	/// Include the unobtainable shade. Only honoured with staircasing.
	pub unobtainable: bool,
}

impl PaletteOptions {
	fn unobtainable_enabled(&self) -> bool {
		self.staircasing && self.unobtainable
	}

	fn tones(&self) -> &'static [Tone] {
		if !self.staircasing {
			&[Tone::Normal]
		} else if self.unobtainable {
			&[Tone::Dark, Tone::Normal, Tone::Light, Tone::Unobtainable]
		} else {
			&[Tone::Dark, Tone::Normal, Tone::Light]
		}
	}
}

/// A rendered palette file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	pub text: String,
	pub colour_count: usize,
}

impl Palette {
	/// More colours than paint.net will load; the file is still usable but
	/// truncated by the editor.
	pub fn exceeds_limit(&self) -> bool {
		self.colour_count > MAX_PALETTE_COLOURS
	}
}

/// Renders the palette for the selected colour sets, ascending by id.
pub fn export_palette(reconciler: &SelectionReconciler, share_base: &Url, options: PaletteOptions) -> Result<Palette> {
	let enabled = |on: bool| if on { "enabled" } else { "disabled" };
	let mut text = String::new();
	let _ = writeln!(text, "; paint.net Palette File");
	let _ = writeln!(text, "; Generated by MapartCraft");
	let _ = writeln!(text, "; Link to preset: {}", url_for_token(share_base, &reconciler.encode()));
	let _ = writeln!(text, "; staircasing: {}", enabled(options.staircasing));
	let _ = writeln!(text, "; unobtainable colours: {}", enabled(options.unobtainable_enabled()));

	let registry = reconciler.registry();
	let mut colour_count = 0;
	for (colour_set, _) in reconciler.selection().selected() {
		let Some(set) = registry.get(colour_set) else {
			continue;
		};
		for &tone in options.tones() {
			let [r, g, b] = set.tones.get(tone);
			let _ = writeln!(text, "FF{r:02X}{g:02X}{b:02X}");
			colour_count += 1;
		}
	}

	if colour_count == 0 {
		return Err(PresetError::NothingSelected);
	}
	let palette = Palette { text, colour_count };
	if palette.exceeds_limit() {
		tracing::warn!(colour_count, limit = MAX_PALETTE_COLOURS, "palette exceeds paint.net colour limit");
	}
	Ok(palette)
}
