//! aria-core
//!
//! Pure domain types shared by the import pipeline and the API.
//! No parsing logic lives here — this is the shared vocabulary of ARIA.

pub mod error;
pub mod models;
