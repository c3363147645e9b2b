//! aria-instruments
//!
//! Assessment instrument registry. Pure data — each supported instrument
//! declares its display name, the abbreviation used to spot it in pasted
//! text, and its canonical scored domains in report order.

pub mod catalog;
pub mod error;
pub mod instruments;

use catalog::AssessmentTypeDescriptor;

/// Trait implemented by each standardized assessment instrument.
pub trait Instrument: Send + Sync {
    /// Stable identifier (e.g., "vbmapp", "vineland-3").
    fn id(&self) -> &str;

    /// Full display name (e.g., "Verbal Behavior Milestones Assessment and Placement Program").
    fn name(&self) -> &str;

    /// Short code as clinicians write it (e.g., "VB-MAPP").
    fn abbreviation(&self) -> &str;

    /// Canonical domain names, in the order they appear on the protocol.
    fn domains(&self) -> &[&'static str];

    /// Owned snapshot of this instrument for the catalog.
    fn descriptor(&self) -> AssessmentTypeDescriptor {
        AssessmentTypeDescriptor {
            id: self.id().to_string(),
            name: self.name().to_string(),
            abbreviation: self.abbreviation().to_string(),
            domains: self.domains().iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Return all registered instruments, in detection priority order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::vb_mapp::VbMapp),
        Box::new(instruments::ablls_r::AbllsR),
        Box::new(instruments::afls::Afls),
        Box::new(instruments::vineland3::Vineland3),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
