//! PDF Write - Low-level single-page PDF authoring
//!
//! This crate provides functionality for:
//! - Creating a blank A4 document from scratch
//! - Inserting text at specific coordinates with the built-in standard fonts
//! - Drawing filled and stroked rectangles and lines
//! - Finalizing the document to bytes or an arbitrary writer
//!
//! # Example
//!
//! ```ignore
//! use pdf_write::{Align, PdfDocument};
//!
//! let mut doc = PdfDocument::new()?;
//! doc.set_font("helvetica", 12.0)?;
//! doc.insert_text("Hello, World!", 100.0, 100.0, Align::Left)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
pub mod font;
mod graphics;
mod text;

pub use document::{Color, PdfDocument, PAGE_HEIGHT, PAGE_WIDTH};
pub use font::{register_standard_fonts, FontCatalog, FontFamily, FontMetrics, FontWeight};
pub use text::{generate_text_operators, simple_word_wrap, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("Invalid font table: {0}")]
    InvalidFontTable(String),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }
}
