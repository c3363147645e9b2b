use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use aria_core::models::parsed::ParsedAssessmentData;
use aria_import::{ImportError, ParseStatus, parse_assessment_text};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub text: String,
    #[serde(default)]
    pub assessment_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub status: ParseStatus,
    pub domain_count: usize,
    pub data: ParsedAssessmentData,
}

/// Parse pasted text without keeping anything. A parse that breaks comes
/// back as `failed` with empty data, not as an error response.
pub async fn preview_import(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    if let Some(id) = req.assessment_type.as_deref()
        && state.catalog.get(id).is_none()
    {
        return Err(ImportError::UnknownAssessmentType(id.to_string()).into());
    }

    let outcome = parse_assessment_text(
        &req.text,
        req.assessment_type.as_deref(),
        &state.catalog,
        &state.import_config,
    );

    Ok(Json(PreviewResponse {
        status: outcome.status(),
        domain_count: outcome.domain_count(),
        data: outcome.into_data(),
    }))
}
