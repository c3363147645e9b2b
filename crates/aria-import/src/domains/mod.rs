//! Domain-score extraction.
//!
//! Two strategies run as a cascade. When an instrument is known, each of
//! its canonical domains is searched for by name. Only if that finds
//! nothing (or no instrument is known) does the generic line parser run.

pub mod generic;
pub mod known;

use serde::Serialize;

use aria_core::models::parsed::ParsedDomain;
use aria_instruments::catalog::AssessmentTypeDescriptor;

use crate::error::ImportError;

pub use generic::extract_generic;
pub use known::KnownInstrumentExtractor;

/// Which strategy produced the final domain list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    KnownInstrument,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainExtraction {
    pub strategy: Strategy,
    pub domains: Vec<ParsedDomain>,
}

pub fn extract_domains(
    text: &str,
    instrument: Option<&AssessmentTypeDescriptor>,
) -> Result<DomainExtraction, ImportError> {
    if let Some(instrument) = instrument {
        let domains = KnownInstrumentExtractor::new(instrument)?.extract(text);
        if !domains.is_empty() {
            tracing::debug!(
                assessment_type = %instrument.id,
                count = domains.len(),
                "matched canonical domains"
            );
            return Ok(DomainExtraction {
                strategy: Strategy::KnownInstrument,
                domains,
            });
        }
        tracing::debug!(
            assessment_type = %instrument.id,
            "no canonical domains found, falling back to line parser"
        );
    }

    let domains = extract_generic(text);
    tracing::debug!(count = domains.len(), "line parser finished");
    Ok(DomainExtraction {
        strategy: Strategy::Generic,
        domains,
    })
}
