//! Preset tokens and block selection state.
//!
//! A [`Selection`] maps every colour set to a chosen block or to nothing. It
//! is owned by a [`SelectionReconciler`], which is the only way to change it:
//! direct choices, applying a list of `(colour set, preset index)` pairs, and
//! switching the target version all go through it and keep the selection
//! valid for the active version.
//!
//! Pairs travel as compact tokens (see [`codec`]) in share links, and as
//! named [`StoredPreset`]s in a [`PresetLibrary`].

pub mod codec;
pub mod error;
pub mod library;
pub mod palette;
pub mod reconcile;
pub mod selection;
pub mod share;

pub use codec::{Decoded, decode, encode_pairs};
pub use error::{CorruptedPreset, PresetError, Result};
pub use library::{PresetLibrary, StoredPreset, default_presets};
pub use palette::{MAX_PALETTE_COLOURS, Palette, PaletteOptions, export_palette};
pub use reconcile::{SelectionReconciler, TokenOutcome, resolve_pair};
pub use selection::Selection;
pub use share::{DEFAULT_SHARE_BASE, PRESET_QUERY_KEY, share_url, token_from_url, url_for_token};
