//! Uploaded files.
//!
//! Every supported file is read as raw text and fed to the same parser as
//! pasted input. PDFs are not structurally parsed: whatever text survives a
//! lossy UTF-8 read is what gets scanned.

use std::path::Path;

use aria_core::models::parsed::ParsedAssessmentData;

use crate::config::ImportConfig;
use crate::error::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFileKind {
    Text,
    Csv,
    Json,
    Pdf,
}

impl ImportFileKind {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(Self::Text),
            "csv" | "tsv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pdf" => Ok(Self::Pdf),
            _ => Err(ImportError::UnsupportedFileType(
                path.display().to_string(),
            )),
        }
    }
}

/// An import file read into memory.
#[derive(Debug, Clone)]
pub struct ImportFile {
    pub kind: ImportFileKind,
    pub text: String,
}

impl ImportFile {
    /// For JSON uploads, a previously exported result is taken as-is.
    /// Anything else (or an export with nothing in it) goes through the
    /// text parser.
    pub fn exported_data(&self) -> Option<ParsedAssessmentData> {
        if self.kind != ImportFileKind::Json {
            return None;
        }
        match ParsedAssessmentData::from_json(&self.text) {
            Ok(data) if !data.is_empty() => Some(data),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "json upload is not an exported result, parsing as text");
                None
            }
        }
    }
}

pub fn read_import_file(path: &Path, config: &ImportConfig) -> Result<ImportFile, ImportError> {
    let kind = ImportFileKind::from_path(path)?;
    let io_err = |source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let len = std::fs::metadata(path).map_err(io_err)?.len();
    if len > config.max_input_bytes as u64 {
        return Err(ImportError::InputTooLarge {
            len: usize::try_from(len).unwrap_or(usize::MAX),
            max: config.max_input_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    tracing::info!(path = %path.display(), ?kind, bytes = bytes.len(), "read import file");
    Ok(ImportFile { kind, text })
}
