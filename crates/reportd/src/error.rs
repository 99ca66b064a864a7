//! Request-boundary errors
//!
//! Every failure kind surfaces as HTTP 500 with a generic message and the
//! underlying error's text, and nothing is persisted for a failed request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced at the request boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The rendering/serialization pipeline failed
    #[error(transparent)]
    Render(#[from] report_render::ReportError),

    /// A render nominally succeeded but produced a zero-length buffer
    #[error("generated PDF is empty")]
    EmptyOutput,

    /// Writing or listing output files failed
    #[error(transparent)]
    Filesystem(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Render(_) | ApiError::EmptyOutput => {
                "Internal server error while generating PDF"
            }
            ApiError::Filesystem(_) => "Error accessing the PDF directory",
        };
        error!("{message}: {self}");

        let body = ErrorBody {
            error: message.to_string(),
            details: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
