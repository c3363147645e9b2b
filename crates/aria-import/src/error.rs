use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unknown assessment type: {0}")]
    UnknownAssessmentType(String),

    #[error("input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("could not build score pattern for domain '{domain}': {source}")]
    Pattern {
        domain: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported import file type: {0}")]
    UnsupportedFileType(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}
