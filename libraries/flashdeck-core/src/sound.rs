//! Sound reference classification

use regex::Regex;
use std::sync::OnceLock;

/// Loose web-address matcher: scheme, `www.` prefix, or `host.tld/` shapes
const URL_PATTERN: &str = r#"(?i)\b((?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#;

fn url_regex() -> Option<&'static Regex> {
    static URL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    URL_REGEX
        .get_or_init(|| Regex::new(URL_PATTERN).ok())
        .as_ref()
}

/// Whether a sound reference contains something shaped like a URL
///
/// URL references are never joined to the deck's base path and are handed
/// to the player untouched.
pub fn is_url(reference: &str) -> bool {
    url_regex().is_some_and(|re| re.is_match(reference))
}
