//! Regex fragments shared by the extractors.

use std::sync::LazyLock;

use regex::Regex;

/// A number, optionally followed by a `/`- or `-`-separated second number
/// ("12", "8.5", "8/15", "3 - 4"). Never spans a line break.
pub(crate) const SCORE_TOKEN: &str = r"\d+(?:\.\d+)?(?:[ \t]*[/-][ \t]*\d+(?:\.\d+)?)?";

pub(crate) static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("({SCORE_TOKEN})")).expect("static regex must compile"));

/// Try each pattern in order and return the first capture group of the
/// first one that matches. Later patterns are never run once one succeeds.
pub(crate) fn first_capture<'t, 'r>(
    patterns: impl IntoIterator<Item = &'r Regex>,
    text: &'t str,
) -> Option<&'t str> {
    patterns
        .into_iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
}

/// First score token anywhere in `text`.
pub(crate) fn find_score(text: &str) -> Option<&str> {
    SCORE_RE.find(text).map(|m| m.as_str())
}
