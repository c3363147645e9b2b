use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("duplicate instrument id: {0}")]
    DuplicateId(String),

    #[error("instrument '{0}' has an empty abbreviation")]
    EmptyAbbreviation(String),
}
