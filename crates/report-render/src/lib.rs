//! Report Render - report normalization and PDF layout rendering
//!
//! This crate provides:
//! - Normalization of loosely-typed report input into a render-ready form
//! - A tagged block tree describing the fixed report layout
//! - Rendering of the block tree into a single-page PDF byte buffer
//! - Asynchronous finalization that drains the produced byte stream
//!
//! # Example
//!
//! ```ignore
//! use report_render::{normalize, render_to_buffer};
//!
//! let input = serde_json::json!({ "title": "Monthly Report" });
//! let report = normalize(&input);
//! let pdf_bytes = render_to_buffer(report).await?;
//! ```

pub mod blocks;
mod normalize;
mod renderer;
mod schema;
mod stream;

pub use blocks::{build_blocks, Block, TableRow};
pub use normalize::normalize;
pub use renderer::{register_fonts, ReportRenderer};
pub use schema::{NormalizedReport, ReportItem};
pub use stream::render_to_buffer;

use thiserror::Error;

/// Errors that can occur while producing a report document
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Render error: {0}")]
    RenderError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_write::PdfError),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
