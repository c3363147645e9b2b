use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::all_instruments;
use crate::error::InstrumentError;

/// Static description of one assessment instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentTypeDescriptor {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub domains: Vec<String>,
}

/// Immutable lookup table of instruments, in registration order.
///
/// Registration order is significant: type detection returns the first
/// entry that matches, so earlier entries win ties.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AssessmentTypeDescriptor>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: Vec<AssessmentTypeDescriptor>) -> Result<Self, InstrumentError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(InstrumentError::DuplicateId(entry.id.clone()));
            }
            if entry.abbreviation.trim().is_empty() {
                return Err(InstrumentError::EmptyAbbreviation(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The instruments shipped with ARIA.
    pub fn builtin() -> Self {
        Self {
            entries: all_instruments().iter().map(|i| i.descriptor()).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&AssessmentTypeDescriptor> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&AssessmentTypeDescriptor, InstrumentError> {
        self.get(id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssessmentTypeDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
