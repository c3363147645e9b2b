use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<aria_instruments::error::InstrumentError> for ApiError {
    fn from(e: aria_instruments::error::InstrumentError) -> Self {
        match e {
            aria_instruments::error::InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("instrument not found: {id}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<aria_import::ImportError> for ApiError {
    fn from(e: aria_import::ImportError) -> Self {
        match e {
            aria_import::ImportError::UnknownAssessmentType(_)
            | aria_import::ImportError::InputTooLarge { .. }
            | aria_import::ImportError::UnsupportedFileType(_) => {
                ApiError::BadRequest(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}
