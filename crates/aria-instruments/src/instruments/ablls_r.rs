use crate::Instrument;

/// ABLLS-R: Assessment of Basic Language and Learning Skills – Revised.
/// 25 lettered domains (A–Y), 544 skills.
pub struct AbllsR;

impl Instrument for AbllsR {
    fn id(&self) -> &str {
        "ablls-r"
    }

    fn name(&self) -> &str {
        "Assessment of Basic Language and Learning Skills - Revised"
    }

    fn abbreviation(&self) -> &str {
        "ABLLS-R"
    }

    fn domains(&self) -> &[&'static str] {
        &[
            // Basic Learner Skills
            "Cooperation and Reinforcer Effectiveness",
            "Visual Performance",
            "Receptive Language",
            "Motor Imitation",
            "Vocal Imitation",
            "Requests",
            "Labeling",
            "Intraverbals",
            "Spontaneous Vocalizations",
            "Syntax and Grammar",
            "Play and Leisure",
            "Social Interaction",
            "Group Instruction",
            "Classroom Routines",
            "Generalized Responding",
            // Academic Skills
            "Reading",
            "Math",
            "Writing",
            "Spelling",
            // Self-Help Skills
            "Dressing",
            "Eating",
            "Grooming",
            "Toileting",
            // Motor Skills
            "Gross Motor",
            "Fine Motor",
        ]
    }
}
