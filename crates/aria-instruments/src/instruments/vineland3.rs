use crate::Instrument;

/// Vineland-3: Vineland Adaptive Behavior Scales, Third Edition.
/// Four adaptive domains plus the Adaptive Behavior Composite.
pub struct Vineland3;

impl Instrument for Vineland3 {
    fn id(&self) -> &str {
        "vineland-3"
    }

    fn name(&self) -> &str {
        "Vineland Adaptive Behavior Scales"
    }

    fn abbreviation(&self) -> &str {
        "Vineland-3"
    }

    fn domains(&self) -> &[&'static str] {
        &[
            "Communication",
            "Daily Living Skills",
            "Socialization",
            "Motor Skills",
            "Adaptive Behavior Composite",
            "Maladaptive Behavior",
        ]
    }
}
