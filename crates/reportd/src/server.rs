//! HTTP server for reportd

use crate::config::Config;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Directory receiving generated documents
    pub output_dir: PathBuf,
}

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::pdf_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let state = Arc::new(AppState {
        output_dir: config.output_dir.clone(),
    });
    let app = app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{addr}");
    info!("  PDF endpoint:  POST /generate-pdf");
    info!("  Test PDF:      GET  /test-pdf");
    info!("  List PDFs:     GET  /pdfs");
    info!("  Health check:  GET  /health");
    info!("  PDFs are saved under {}", config.output_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
