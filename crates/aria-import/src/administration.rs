//! Administration details: evaluation date and examiner.

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::first_capture;

static LABELED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:assessment date|evaluation date|eval date|test date|administered|date)[:\s]*(\d{1,2}[/-]\d{1,2}[/-](?:\d{4}|\d{2}))\b",
    )
    .expect("static regex must compile")
});

static BARE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2}[/-]\d{1,2}[/-](?:\d{4}|\d{2}))\b").expect("static regex must compile")
});

static MONTH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{1,2},?\s+\d{4})\b",
    )
    .expect("static regex must compile")
});

// The name is confined to one line so a trailing score table is never
// swallowed into the examiner.
static EXAMINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:examiner|evaluator|administered by|clinician|bcba|assessor|tester)[ \t]*:?[ \t]*([A-Za-z .,'\t]+(?:BCBA|BCaBA|RBT|Ph\.D|M\.A|M\.S|OTR|SLP)?)",
    )
    .expect("static regex must compile")
});

/// Date and examiner found in one pass over the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Administration {
    pub date: Option<String>,
    pub examiner: Option<String>,
}

pub fn extract_administration(text: &str) -> Administration {
    Administration {
        date: extract_date(text),
        examiner: extract_examiner(text),
    }
}

/// Labeled numeric date, then any numeric date, then a spelled-out month.
/// The matched substring is returned as written.
pub fn extract_date(text: &str) -> Option<String> {
    first_capture([&*LABELED_DATE, &*BARE_DATE, &*MONTH_DATE], text).map(str::to_string)
}

pub fn extract_examiner(text: &str) -> Option<String> {
    first_capture([&*EXAMINER], text)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
