//! The import dialog's state: current text, manual instrument selection,
//! and the latest preview.

use std::path::Path;
use std::sync::Arc;

use aria_core::models::parsed::ParsedAssessmentData;
use aria_instruments::catalog::Catalog;

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::pipeline::{ParseOutcome, parse_assessment_text};
use crate::source::read_import_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The user is typing or pasting; any preview shown is out of date.
    CollectingInput,
    /// A preview reflects the current text and selection.
    Previewing,
}

/// A non-final parse result shown while the user is still editing.
#[derive(Debug)]
pub struct ImportPreview {
    /// Input revision this preview was computed from.
    pub revision: u64,
    pub outcome: ParseOutcome,
    pub parsed_at: jiff::Timestamp,
}

impl ImportPreview {
    pub fn domain_count(&self) -> usize {
        self.outcome.domain_count()
    }

    /// Abbreviation of the detected or selected instrument, for the badge.
    pub fn assessment_abbreviation<'c>(&self, catalog: &'c Catalog) -> Option<&'c str> {
        let id = self.outcome.data()?.assessment_type.as_deref()?;
        catalog.get(id).map(|entry| entry.abbreviation.as_str())
    }

    pub fn assessment_date(&self) -> Option<&str> {
        self.outcome.data()?.assessment_date.as_deref()
    }

    /// What the host form receives on confirm.
    pub fn data(&self) -> ParsedAssessmentData {
        self.outcome.data().cloned().unwrap_or_default()
    }
}

/// Somewhere to read pasted text from, such as the system clipboard.
pub trait ClipboardSource {
    fn read_text(&self) -> impl Future<Output = Result<String, ImportError>> + Send;
}

pub struct ImportSession {
    catalog: Arc<Catalog>,
    config: ImportConfig,
    text: String,
    assessment_type: Option<String>,
    revision: u64,
    state: SessionState,
    preview: Option<Arc<ImportPreview>>,
}

impl ImportSession {
    pub fn new(catalog: Arc<Catalog>, config: ImportConfig) -> Self {
        Self {
            catalog,
            config,
            text: String::new(),
            assessment_type: None,
            revision: 0,
            state: SessionState::CollectingInput,
            preview: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn assessment_type(&self) -> Option<&str> {
        self.assessment_type.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn preview(&self) -> Option<&ImportPreview> {
        self.preview.as_deref()
    }

    pub(crate) fn shared_preview(&self) -> Option<Arc<ImportPreview>> {
        self.preview.clone()
    }

    fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Replace the input text. Returns `false` if it was unchanged.
    ///
    /// Emptying the text discards the preview.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.revision += 1;
        self.state = SessionState::CollectingInput;
        if !self.has_text() {
            self.preview = None;
        }
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.revision += 1;
        self.state = SessionState::CollectingInput;
        self.preview = None;
    }

    /// Pick (or un-pick) an instrument by hand. With text present, the
    /// parse re-runs at once against the new selection.
    pub fn select_assessment_type(&mut self, assessment_type: Option<String>) {
        self.assessment_type = assessment_type;
        self.revision += 1;
        if self.has_text() {
            self.parse();
        } else {
            self.state = SessionState::CollectingInput;
        }
    }

    /// Parse the current text now and store the preview.
    ///
    /// Failures are logged and kept as [`ParseOutcome::Failed`]; they are
    /// never returned to the caller.
    pub fn parse(&mut self) -> &ImportPreview {
        let outcome = parse_assessment_text(
            &self.text,
            self.assessment_type.as_deref(),
            &self.catalog,
            &self.config,
        );
        self.publish(outcome)
    }

    fn publish(&mut self, outcome: ParseOutcome) -> &ImportPreview {
        self.state = SessionState::Previewing;
        let preview = Arc::new(ImportPreview {
            revision: self.revision,
            outcome,
            parsed_at: jiff::Timestamp::now(),
        });
        &**self.preview.insert(preview)
    }

    /// Paste from `clipboard`, replacing the text. A failed read (for
    /// instance, permission denied) is logged and leaves the text as is.
    pub async fn paste_from_clipboard<C: ClipboardSource>(&mut self, clipboard: &C) -> bool {
        match clipboard.read_text().await {
            Ok(text) => self.set_text(text),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard read failed");
                false
            }
        }
    }

    /// Load an uploaded file into the session and parse it.
    ///
    /// A JSON file holding an exported result becomes the preview directly.
    /// Its instrument is reported like a detected one and leaves the manual
    /// selection alone.
    pub fn load_file(&mut self, path: &Path) -> Result<&ImportPreview, ImportError> {
        let file = read_import_file(path, &self.config)?;
        let exported = file.exported_data();
        self.set_text(file.text);

        match exported {
            Some(data) => Ok(self.publish(ParseOutcome::from_data(data))),
            None => Ok(self.parse()),
        }
    }

    /// Hand the current result to `on_import`.
    ///
    /// Stale input is parsed first. Returns `false` without calling
    /// `on_import` when there is no text to import.
    pub fn confirm<F>(&mut self, on_import: F) -> bool
    where
        F: FnOnce(ParsedAssessmentData),
    {
        if !self.has_text() {
            return false;
        }
        if self.state != SessionState::Previewing || self.preview.is_none() {
            self.parse();
        }
        let data = self.preview().map(ImportPreview::data).unwrap_or_default();
        tracing::info!(domains = data.domains.len(), "import confirmed");
        on_import(data);
        true
    }
}
