use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One scored domain pulled out of assessment text.
///
/// Extraction only ever fills `name` and `raw_score`; the remaining fields
/// are carried through for clinicians to complete by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedDomain {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_equivalent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ParsedDomain {
    /// A domain with a name and the score token exactly as it appeared.
    pub fn scored(name: impl Into<String>, raw_score: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_score: Some(raw_score.into()),
            ..Self::default()
        }
    }
}

/// The structured result of one parse over pasted or uploaded text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedAssessmentData {
    /// Soft reference to a catalog instrument id. Never validated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,
    /// The matched substring, not normalized to a calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examiner: Option<String>,
    #[serde(default)]
    pub domains: Vec<ParsedDomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

impl ParsedAssessmentData {
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// True when nothing at all was detected.
    pub fn is_empty(&self) -> bool {
        self.assessment_type.is_none()
            && self.assessment_date.is_none()
            && self.examiner.is_none()
            && self.domains.is_empty()
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a previously exported result. Every domain must carry a name.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let data: Self = serde_json::from_str(json)?;
        if let Some(index) = data.domains.iter().position(|d| d.name.trim().is_empty()) {
            return Err(CoreError::MissingField(format!("domains[{index}].name")));
        }
        Ok(data)
    }
}
