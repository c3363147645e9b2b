//! Known-instrument extraction: look for each canonical domain by name.

use regex::Regex;

use aria_core::models::parsed::ParsedDomain;
use aria_instruments::catalog::AssessmentTypeDescriptor;

use crate::error::ImportError;
use crate::patterns::{SCORE_TOKEN, first_capture};

/// Escape the domain name and let any run of whitespace in it match any
/// run of spaces or tabs in the text. Matches never cross a line.
fn name_pattern(name: &str) -> String {
    regex::escape(name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(r"[ \t]+")
}

/// Score patterns for one canonical domain, in priority order.
struct DomainMatcher {
    name: String,
    patterns: [Regex; 3],
}

impl DomainMatcher {
    fn compile(name: &str) -> Result<Self, ImportError> {
        let escaped = name_pattern(name);
        let build = |pattern: String| {
            Regex::new(&pattern).map_err(|source| ImportError::Pattern {
                domain: name.to_string(),
                source,
            })
        };

        Ok(Self {
            name: name.to_string(),
            patterns: [
                // "Mand: 8", "Mand - 8/15"
                build(format!(r"(?i){escaped}[: \t-]+({SCORE_TOKEN})"))?,
                // "Mand score 8", "Mand8"
                build(format!(r"(?i){escaped}[ \t]*(?:score)?[ \t]*:?[ \t]*(\d+(?:\.\d+)?)"))?,
                // "Mand Level 2"
                build(format!(r"(?i){escaped}[ \t]+Level[ \t]*(\d+)"))?,
            ],
        })
    }

    fn find(&self, text: &str) -> Option<ParsedDomain> {
        first_capture(&self.patterns, text).map(|score| ParsedDomain::scored(&self.name, score))
    }
}

/// Compiled matchers for every domain of one instrument.
pub struct KnownInstrumentExtractor {
    matchers: Vec<DomainMatcher>,
}

impl KnownInstrumentExtractor {
    pub fn new(instrument: &AssessmentTypeDescriptor) -> Result<Self, ImportError> {
        let matchers = instrument
            .domains
            .iter()
            .filter(|name| !name.trim().is_empty())
            .map(|name| DomainMatcher::compile(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    /// One entry per canonical domain that has a score in `text`, in
    /// catalog order. Domains without a score are left out entirely.
    pub fn extract(&self, text: &str) -> Vec<ParsedDomain> {
        self.matchers.iter().filter_map(|m| m.find(text)).collect()
    }
}
