use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use aria_instruments::catalog::AssessmentTypeDescriptor;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    abbreviation: String,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = state
        .catalog
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id.clone(),
            name: i.name.clone(),
            abbreviation: i.abbreviation.clone(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentTypeDescriptor>, ApiError> {
    let instrument = state.catalog.require(&id)?;
    Ok(Json(instrument.clone()))
}
