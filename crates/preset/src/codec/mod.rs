//! Preset token codec.
//!
//! A token is the concatenation of one record per selected colour set:
//!
//! ```text
//! token       = record*
//! record      = colour-set preset-index
//! colour-set  = [0-9a-z]+          ; base 36
//! preset-index = [A-Z]+            ; base 26, digits Q..Z = 0..9, A..P = 10..25
//! ```
//!
//! The two digit alphabets are disjoint, so records need no separator. The
//! format is shared through links and must stay readable for tokens issued
//! by earlier releases.
//!
//! Decoding is lenient: records that do not parse (an oversized number, a
//! colour set run with no preset index after it) are skipped. Only a token
//! containing characters outside `[0-9a-zA-Z]` is rejected outright.

mod scan;

use mapart_primitives::{COLOUR_SET_DIGITS, PRESET_INDEX_DIGITS, PresetPair};

use crate::error::CorruptedPreset;
use scan::Records;

/// Reserved token that is answered with a redirect instead of a selection.
pub const EASTER_EGG_TOKEN: &str = "dQw4w9WgXcQ";

/// Where [`EASTER_EGG_TOKEN`] leads.
pub const EASTER_EGG_URL: &str = "https://www.youtube.com/watch?v=cZ5wOPinZd4";

/// Result of decoding a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
	/// Pairs in token order. Not yet checked against any registry.
	Pairs(Vec<PresetPair>),
	/// The token is reserved; the caller should navigate here instead.
	Redirect(&'static str),
}

/// Encodes pairs into a token, in the order given.
pub fn encode_pairs<'a>(pairs: impl IntoIterator<Item = &'a PresetPair>) -> String {
	let mut token = String::new();
	for pair in pairs {
		token.push_str(&COLOUR_SET_DIGITS.render(pair.colour_set.as_u32()));
		token.push_str(&PRESET_INDEX_DIGITS.render(pair.preset_index.as_u32()));
	}
	token
}

/// Splits a token into pairs.
///
/// Fails with [`CorruptedPreset`] only when the token contains a
/// character outside `[0-9a-zA-Z]`.
pub fn decode(token: &str) -> Result<Decoded, CorruptedPreset> {
	if token == EASTER_EGG_TOKEN {
		return Ok(Decoded::Redirect(EASTER_EGG_URL));
	}
	validate(token)?;
	let pairs = Records::new(token).filter_map(|record| record.to_pair()).collect();
	Ok(Decoded::Pairs(pairs))
}

/// Checks the token alphabet.
pub fn validate(token: &str) -> Result<(), CorruptedPreset> {
	match token.char_indices().find(|(_, c)| !c.is_ascii_alphanumeric()) {
		Some((offset, found)) => Err(CorruptedPreset { offset, found }),
		None => Ok(()),
	}
}
