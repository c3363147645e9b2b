use crate::Instrument;

/// AFLS: Assessment of Functional Living Skills. Six protocols covering
/// self-care through vocational skills.
pub struct Afls;

impl Instrument for Afls {
    fn id(&self) -> &str {
        "afls"
    }

    fn name(&self) -> &str {
        "Assessment of Functional Living Skills"
    }

    fn abbreviation(&self) -> &str {
        "AFLS"
    }

    fn domains(&self) -> &[&'static str] {
        &[
            "Basic Living Skills",
            "Home Skills",
            "Community Participation Skills",
            "School Skills",
            "Vocational Skills",
            "Independent Living Skills",
        ]
    }
}
