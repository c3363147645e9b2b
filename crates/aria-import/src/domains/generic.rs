//! Line-by-line fallback for text that does not name its domains the way
//! any catalog instrument does.

use std::sync::LazyLock;

use regex::Regex;

use aria_core::models::parsed::ParsedDomain;

use crate::patterns::find_score;

const MIN_LINE_CHARS: usize = 5;
const MIN_NAME_CHARS: usize = 3;

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:domain|area|skill|category|score|name)").expect("static regex must compile")
});

static TRAILING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z\s/&]+?)\s+(\d+(?:\.\d+)?(?:[/-]\d+(?:\.\d+)?)?)\s*$")
        .expect("static regex must compile")
});

/// One way of reading a line. Only the first rule whose `applies` holds is
/// tried; if it finds nothing the line is dropped.
struct LineRule {
    name: &'static str,
    applies: fn(&str) -> bool,
    extract: fn(&str) -> Option<ParsedDomain>,
}

const LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "tab_delimited",
        applies: has_tab,
        extract: tab_delimited,
    },
    LineRule {
        name: "key_value",
        applies: has_key_separator,
        extract: key_value,
    },
    LineRule {
        name: "trailing_number",
        applies: always,
        extract: trailing_number,
    },
];

fn has_tab(line: &str) -> bool {
    line.contains('\t')
}

fn has_key_separator(line: &str) -> bool {
    line.contains([':', '-'])
}

fn always(_: &str) -> bool {
    true
}

fn long_enough(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_CHARS
}

/// "Communication\t85" or "Communication\t\tStandard\t85".
fn tab_delimited(line: &str) -> Option<ParsedDomain> {
    let parts: Vec<&str> = line
        .split('\t')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let (name, rest) = parts.split_first()?;
    if rest.is_empty() || !long_enough(name) {
        return None;
    }

    let score = find_score(&rest.join(" "))?.to_string();
    Some(ParsedDomain::scored(*name, score))
}

/// "Mand: 8", "Communication - 85", "Tact: 5/10".
///
/// The name runs up to the first separator; the score is searched for in
/// everything after it, so a range like "8-15" survives intact.
fn key_value(line: &str) -> Option<ParsedDomain> {
    let (name, rest) = line.split_once([':', '-'])?;
    let name = name.trim();

    if !long_enough(name) || name.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let score = find_score(rest)?;
    Some(ParsedDomain::scored(name, score))
}

/// "Social Skills 72" with nothing after the number.
fn trailing_number(line: &str) -> Option<ParsedDomain> {
    let caps = TRAILING_NUMBER.captures(line)?;
    let name = caps.get(1)?.as_str().trim();
    if !long_enough(name) {
        return None;
    }
    Some(ParsedDomain::scored(name, caps.get(2)?.as_str()))
}

fn is_candidate(line: &str) -> bool {
    line.chars().count() >= MIN_LINE_CHARS && !HEADER_LINE.is_match(line)
}

/// Scan `text` one line at a time. Each line yields at most one domain.
pub fn extract_generic(text: &str) -> Vec<ParsedDomain> {
    text.lines()
        .map(str::trim)
        .filter(|line| is_candidate(line))
        .filter_map(|line| {
            let rule = LINE_RULES.iter().find(|rule| (rule.applies)(line))?;
            let domain = (rule.extract)(line);
            if domain.is_some() {
                tracing::trace!(rule = rule.name, line, "matched line");
            }
            domain
        })
        .collect()
}
