//! Share links of the form `<base>?preset=<token>`.

use url::Url;

use crate::error::{PresetError, Result};
use crate::reconcile::SelectionReconciler;

/// Base URL used when no other is configured.
pub const DEFAULT_SHARE_BASE: &str = "https://rebane2001.com/mapartcraft/";

/// Query parameter carrying the token.
pub const PRESET_QUERY_KEY: &str = "preset";

/// Link to `base` with `token` as the preset parameter. Replaces any
/// existing query.
pub fn url_for_token(base: &Url, token: &str) -> Url {
	let mut url = base.clone();
	url.set_query(Some(&format!("{PRESET_QUERY_KEY}={token}")));
	url
}

/// Link sharing the current selection.
///
/// Fails with [`PresetError::NothingSelected`] when no colour set is set.
pub fn share_url(base: &Url, reconciler: &SelectionReconciler) -> Result<Url> {
	if reconciler.selection().is_empty() {
		return Err(PresetError::NothingSelected);
	}
	Ok(url_for_token(base, &reconciler.encode()))
}

/// The preset token of a link, if it has one.
pub fn token_from_url(url: &Url) -> Option<String> {
	url.query_pairs()
		.find(|(key, _)| key == PRESET_QUERY_KEY)
		.map(|(_, value)| value.into_owned())
}
