//! Sound reference resolution

use flashdeck_core::is_url;
use std::path::Path;

const SEPARATOR: char = '/';

/// Join a sound reference onto the deck's base path
///
/// URLs and empty references are returned unchanged, as is everything when
/// there is no base path. Exactly one separator ends up between base and
/// reference.
pub fn resolve_sound_reference(base: &str, reference: &str) -> String {
    if reference.is_empty() || base.is_empty() || is_url(reference) {
        return reference.to_string();
    }

    format!(
        "{}{}{}",
        base.trim_end_matches(SEPARATOR),
        SEPARATOR,
        reference.trim_start_matches(SEPARATOR)
    )
}

/// Default base path for a deck file: the directory that contains it
pub fn default_sound_base(deck_path: &Path) -> String {
    deck_path
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}
