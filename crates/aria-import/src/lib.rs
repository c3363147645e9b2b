//! aria-import
//!
//! Pulls structured assessment data out of unstructured text: pasted score
//! tables, CSV or tab-delimited exports, or prose copied from a report.
//!
//! The pipeline detects which instrument the text belongs to, picks out the
//! evaluation date and examiner, then extracts per-domain scores. Nothing
//! here raises on odd input; a parse that finds nothing is an empty result.

pub mod administration;
pub mod config;
pub mod detect;
pub mod domains;
pub mod error;
pub mod live;
mod patterns;
pub mod pipeline;
pub mod session;
pub mod source;

pub use config::ImportConfig;
pub use error::ImportError;
pub use pipeline::{ParseOutcome, ParseStatus, parse_assessment_text, try_parse};
