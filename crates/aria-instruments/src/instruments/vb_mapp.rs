use crate::Instrument;

/// VB-MAPP: Verbal Behavior Milestones Assessment and Placement Program.
/// 16 skill areas across 3 developmental levels, 170 milestones.
pub struct VbMapp;

impl Instrument for VbMapp {
    fn id(&self) -> &str {
        "vbmapp"
    }

    fn name(&self) -> &str {
        "Verbal Behavior Milestones Assessment and Placement Program"
    }

    fn abbreviation(&self) -> &str {
        "VB-MAPP"
    }

    fn domains(&self) -> &[&'static str] {
        &[
            "Mand",
            "Tact",
            "Listener Responding",
            "Visual Perceptual Skills and Matching-to-Sample",
            "Independent Play",
            "Social Behavior and Social Play",
            "Motor Imitation",
            "Echoic",
            "Spontaneous Vocal Behavior",
            "Listener Responding by Function, Feature, and Class",
            "Intraverbal",
            "Classroom Routines and Group Skills",
            "Linguistic Structure",
            "Reading",
            "Writing",
            "Math",
        ]
    }
}
