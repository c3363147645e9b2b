//! Assessment-type detection.

use aria_instruments::catalog::{AssessmentTypeDescriptor, Catalog};

/// Lower-case and drop hyphens and whitespace, so "VB-MAPP", "VB MAPP"
/// and "vbmapp" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return the first catalog entry mentioned in `text`.
///
/// An entry matches when its normalized abbreviation occurs in the
/// normalized text, or its full name occurs in the lower-cased text.
/// Entries are checked in registration order and the first hit wins,
/// regardless of where in the text either mention appears.
pub fn detect_assessment_type<'c>(
    text: &str,
    catalog: &'c Catalog,
) -> Option<&'c AssessmentTypeDescriptor> {
    if text.trim().is_empty() {
        return None;
    }

    let normalized_text = normalize(text);
    let lowered_text = text.to_lowercase();

    let found = catalog.iter().find(|entry| {
        let abbreviation = normalize(&entry.abbreviation);
        let name = entry.name.trim().to_lowercase();
        (!abbreviation.is_empty() && normalized_text.contains(&abbreviation))
            || (!name.is_empty() && lowered_text.contains(&name))
    });

    if let Some(entry) = found {
        tracing::debug!(assessment_type = %entry.id, "detected assessment type");
    }
    found
}
