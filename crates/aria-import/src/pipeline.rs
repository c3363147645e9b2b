//! One full parse: detect the instrument, pull administration details,
//! then extract domain scores.

use serde::Serialize;

use aria_core::models::parsed::ParsedAssessmentData;
use aria_instruments::catalog::Catalog;

use crate::administration::extract_administration;
use crate::config::ImportConfig;
use crate::detect::detect_assessment_type;
use crate::domains::extract_domains;
use crate::error::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    Extracted,
    NoDomains,
    Failed,
}

/// Result of a parse, keeping "found nothing" distinct from "broke".
#[derive(Debug)]
pub enum ParseOutcome {
    /// At least one domain score was found.
    Extracted(ParsedAssessmentData),
    /// The parse ran but found no domain scores. Type, date and examiner
    /// may still be set.
    NoDomains(ParsedAssessmentData),
    /// A step failed; the UI shows this as nothing detected.
    Failed(ImportError),
}

impl ParseOutcome {
    pub fn from_data(data: ParsedAssessmentData) -> Self {
        if data.domains.is_empty() {
            Self::NoDomains(data)
        } else {
            Self::Extracted(data)
        }
    }

    pub fn status(&self) -> ParseStatus {
        match self {
            Self::Extracted(_) => ParseStatus::Extracted,
            Self::NoDomains(_) => ParseStatus::NoDomains,
            Self::Failed(_) => ParseStatus::Failed,
        }
    }

    /// The parsed data, or `None` when the parse failed.
    pub fn data(&self) -> Option<&ParsedAssessmentData> {
        match self {
            Self::Extracted(data) | Self::NoDomains(data) => Some(data),
            Self::Failed(_) => None,
        }
    }

    /// Collapse to what the host form receives; a failure becomes empty data.
    pub fn into_data(self) -> ParsedAssessmentData {
        match self {
            Self::Extracted(data) | Self::NoDomains(data) => data,
            Self::Failed(_) => ParsedAssessmentData::default(),
        }
    }

    pub fn domain_count(&self) -> usize {
        self.data().map_or(0, ParsedAssessmentData::domain_count)
    }

    pub fn error(&self) -> Option<&ImportError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Run the pipeline, surfacing any failure.
///
/// `assessment_type` overrides detection; it must name a catalog entry.
pub fn try_parse(
    text: &str,
    assessment_type: Option<&str>,
    catalog: &Catalog,
    config: &ImportConfig,
) -> Result<ParsedAssessmentData, ImportError> {
    if text.len() > config.max_input_bytes {
        return Err(ImportError::InputTooLarge {
            len: text.len(),
            max: config.max_input_bytes,
        });
    }

    let instrument = match assessment_type {
        Some(id) => Some(
            catalog
                .get(id)
                .ok_or_else(|| ImportError::UnknownAssessmentType(id.to_string()))?,
        ),
        None => detect_assessment_type(text, catalog),
    };

    let administration = extract_administration(text);
    let extraction = extract_domains(text, instrument)?;

    Ok(ParsedAssessmentData {
        assessment_type: instrument.map(|i| i.id.clone()),
        assessment_date: administration.date,
        examiner: administration.examiner,
        domains: extraction.domains,
        summary: None,
        recommendations: None,
    })
}

/// Run the pipeline and classify the result. Never fails.
pub fn parse_assessment_text(
    text: &str,
    assessment_type: Option<&str>,
    catalog: &Catalog,
    config: &ImportConfig,
) -> ParseOutcome {
    match try_parse(text, assessment_type, catalog, config) {
        Ok(data) => {
            tracing::info!(
                assessment_type = data.assessment_type.as_deref().unwrap_or("unknown"),
                domains = data.domains.len(),
                "parsed assessment text"
            );
            ParseOutcome::from_data(data)
        }
        Err(e) => {
            tracing::warn!(error = %e, "assessment parse failed, treating as no data");
            ParseOutcome::Failed(e)
        }
    }
}
