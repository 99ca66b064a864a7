//! API routes for reportd

use crate::error::ApiError;
use crate::server::AppState;
use crate::storage::{self, PdfFileInfo};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use report_render::{normalize, render_to_buffer};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

pub fn pdf_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/generate-pdf", post(generate_pdf))
        .route("/test-pdf", get(test_pdf))
        .route("/pdfs", get(list_pdfs))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

/// Response for a successful generation
#[derive(Debug, Serialize)]
pub struct GeneratedResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub filepath: String,
    pub size: u64,
    pub timestamp: String,
}

/// Response listing the stored PDF files
#[derive(Debug, Serialize)]
pub struct PdfListResponse {
    pub success: bool,
    pub count: usize,
    pub files: Vec<PdfFileInfo>,
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// Render the fixed sample report and persist it
///
/// The request body is ignored; the report content is server-constructed.
async fn generate_pdf(
    State(state): State<AppStateArc>,
) -> Result<Json<GeneratedResponse>, ApiError> {
    let data = sample_report();
    info!("Generating PDF with sample data: {data}");
    render_and_store(&state, data, "reporte", "PDF generated successfully").await
}

/// Render the fixed test report (no quantities, no notes) and persist it
async fn test_pdf(State(state): State<AppStateArc>) -> Result<Json<GeneratedResponse>, ApiError> {
    let data = test_report();
    info!("Generating test PDF with data: {data}");
    render_and_store(&state, data, "test-reporte", "Test PDF generated successfully").await
}

async fn render_and_store(
    state: &AppState,
    data: serde_json::Value,
    prefix: &str,
    message: &str,
) -> Result<Json<GeneratedResponse>, ApiError> {
    let report = normalize(&data);
    let buffer = render_to_buffer(report).await?;

    // A zero-length buffer counts as a failure even though the renderer
    // reported none; nothing is persisted in that case.
    if buffer.is_empty() {
        return Err(ApiError::EmptyOutput);
    }

    let filename = storage::timestamped_filename(prefix);
    let filepath = storage::write_pdf(&state.output_dir, &filename, &buffer)?;
    info!("PDF saved to {} ({} bytes)", filepath.display(), buffer.len());

    Ok(Json(GeneratedResponse {
        success: true,
        message: message.to_string(),
        filename,
        filepath: filepath.display().to_string(),
        size: buffer.len() as u64,
        timestamp: now_rfc3339(),
    }))
}

/// List previously generated PDFs, most recent first
async fn list_pdfs(State(state): State<AppStateArc>) -> Result<Json<PdfListResponse>, ApiError> {
    let files = storage::list_pdfs(&state.output_dir)?;
    Ok(Json(PdfListResponse {
        success: true,
        count: files.len(),
        files,
    }))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Server running".to_string(),
        timestamp: now_rfc3339(),
    })
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The fixed sample report rendered by `POST /generate-pdf`
fn sample_report() -> serde_json::Value {
    json!({
        "title": "Automated Report",
        "date": chrono::Local::now().format("%d/%m/%Y").to_string(),
        "id": format!("REP-{}", Utc::now().timestamp_millis()),
        "status": "Generated",
        "items": [
            { "id": 1, "name": "Product A", "unitPrice": 100, "quantity": 2 },
            { "id": 2, "name": "Product B", "unitPrice": 200, "quantity": 1 },
            { "id": 3, "name": "Product C", "unitPrice": 150, "quantity": 3 }
        ],
        "total": 750,
        "notes": "This report was generated automatically by the system."
    })
}

/// The fixed sample rendered by `GET /test-pdf`
fn test_report() -> serde_json::Value {
    json!({
        "title": "Test Report",
        "date": chrono::Local::now().format("%d/%m/%Y").to_string(),
        "items": [
            { "id": 1, "name": "Product A", "unitPrice": 100 },
            { "id": 2, "name": "Product B", "unitPrice": 200 },
            { "id": 3, "name": "Product C", "unitPrice": 150 }
        ],
        "total": 450
    })
}
