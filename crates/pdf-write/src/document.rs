//! PDF Document wrapper

use crate::font::{self, encode_winansi, FontWeight};
use crate::graphics::{fill_rect_operators, line_operators, stroke_rect_operators};
use crate::text::{generate_text_operators, to_hex_string, TextRenderContext};
use crate::{Align, PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::BTreeMap;
use std::io::Write;

/// A4 page width in points
pub const PAGE_WIDTH: f64 = 595.28;

/// A4 page height in points
pub const PAGE_HEIGHT: f64 = 841.89;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// PDF Document wrapper providing high-level operations on a fresh
/// single-page A4 document
///
/// All Y coordinates taken by this type are measured from the top of the
/// page; they are converted to PDF bottom-origin coordinates internally.
/// Content operators are buffered and flushed into the page's content
/// stream when the document is finalized.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// The single page object
    page_id: ObjectId,
    /// Buffered content operators, flushed at finalization
    content: Vec<u8>,
    /// Current font family name
    current_family: String,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Font resources used so far (BaseFont name -> resource name)
    font_resources: BTreeMap<String, String>,
    /// Next font resource number
    next_font_resource: u32,
    /// Whether the buffered content has been flushed to the page
    finalized: bool,
}

impl PdfDocument {
    /// Create a new single-page A4 document
    pub fn new() -> Result<Self> {
        let mut inner = Document::with_version("1.5");

        let pages_id = inner.new_object_id();

        let page_id = inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(595.28),
                Object::Real(841.89),
            ],
            "Resources" => Dictionary::new(),
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        inner.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Ok(Self {
            inner,
            page_id,
            content: Vec::new(),
            current_family: "helvetica".to_string(),
            current_weight: FontWeight::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            font_resources: BTreeMap::new(),
            next_font_resource: 1,
            finalized: false,
        })
    }

    /// Set the current font family and size
    ///
    /// # Arguments
    /// * `family` - Font family identifier (see [`crate::font::FontCatalog`])
    /// * `size` - Font size in points
    pub fn set_font(&mut self, family: &str, size: f32) -> Result<()> {
        // Validate the family exists before accepting it
        font::catalog()?.family(family)?;
        self.current_family = family.to_string();
        self.current_font_size = size;
        Ok(())
    }

    /// Set only the font size (keeps current family/weight)
    pub fn set_font_size(&mut self, size: f32) {
        self.current_font_size = size;
    }

    /// Set the font weight (keeps current family/size)
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.current_weight = weight;
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `align` - Text alignment relative to `x`
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()> {
        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let metrics = *font::catalog()?
            .family(&self.current_family)?
            .variant(self.current_weight);

        let text_width = metrics.text_width_points(text, self.current_font_size);
        let font_resource_name = self.get_or_create_font_ref(metrics.base_font);

        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: self.current_font_size,
            text_width,
            color: self.current_text_color,
        };

        let text_hex = to_hex_string(&encode_winansi(text));
        let pdf_y = PAGE_HEIGHT - y;
        let operators = generate_text_operators(&text_hex, x, pdf_y, align, &ctx);

        self.content.extend_from_slice(&operators);
        Ok(())
    }

    /// Measure a string with the current font
    ///
    /// # Returns
    /// Width in points
    pub fn text_width(&self, text: &str) -> Result<f64> {
        let metrics = font::catalog()?
            .family(&self.current_family)?
            .variant(self.current_weight);
        Ok(metrics.text_width_points(text, self.current_font_size))
    }

    /// Draw a filled rectangle
    ///
    /// # Arguments
    /// * `x` - Left edge in points
    /// * `y` - Top edge in points (from top)
    /// * `width`, `height` - Extent in points
    /// * `color` - Fill color
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let pdf_y = PAGE_HEIGHT - y - height;
        let operators = fill_rect_operators(x, pdf_y, width, height, color);
        self.content.extend_from_slice(&operators);
    }

    /// Draw a rectangle outline
    ///
    /// # Arguments
    /// * `x` - Left edge in points
    /// * `y` - Top edge in points (from top)
    /// * `width`, `height` - Extent in points
    /// * `line_width` - Stroke width in points
    /// * `color` - Stroke color
    pub fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        line_width: f64,
        color: Color,
    ) {
        let pdf_y = PAGE_HEIGHT - y - height;
        let operators = stroke_rect_operators(x, pdf_y, width, height, line_width, color);
        self.content.extend_from_slice(&operators);
    }

    /// Draw a straight line
    ///
    /// # Arguments
    /// * `x1`, `y1` - Start point in points (Y from top)
    /// * `x2`, `y2` - End point in points (Y from top)
    /// * `line_width` - Stroke width in points
    /// * `color` - Stroke color
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, line_width: f64, color: Color) {
        let operators = line_operators(
            x1,
            PAGE_HEIGHT - y1,
            x2,
            PAGE_HEIGHT - y2,
            line_width,
            color,
        );
        self.content.extend_from_slice(&operators);
    }

    /// Finalize the document and write it to a writer
    ///
    /// Flushes the buffered content stream, attaches the font resources to
    /// the page and serializes the whole document. The buffered content is
    /// consumed by the first call; later calls re-serialize the same
    /// document.
    pub fn write_to<W: Write>(&mut self, target: &mut W) -> Result<()> {
        self.finalize()?;
        self.inner
            .save_to(target)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Finalize the document and return it as bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Get or create a font resource name for a BaseFont
    ///
    /// Returns the resource name (e.g., "F1", "F2") for use in content
    /// streams. The font dictionary itself is written at finalization.
    fn get_or_create_font_ref(&mut self, base_font: &str) -> String {
        if let Some(resource_name) = self.font_resources.get(base_font) {
            return resource_name.clone();
        }

        let resource_name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        self.font_resources
            .insert(base_font.to_string(), resource_name.clone());
        resource_name
    }

    /// Flush buffered content and font resources into the page object
    fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        self.finalized = true;

        let content = std::mem::take(&mut self.content);
        let contents_id = self
            .inner
            .add_object(Stream::new(Dictionary::new(), content));

        // Standard fonts need only a name and an encoding; no font program
        // is embedded.
        let mut font_dict = Dictionary::new();
        for (base_font, resource_name) in &self.font_resources {
            let font_id = self.inner.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font.as_str(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }

        let mut resources = Dictionary::new();
        if !self.font_resources.is_empty() {
            resources.set(b"Font", Object::Dictionary(font_dict));
        }

        let page_obj = self.inner.get_object(self.page_id)?;
        let page_dict = page_obj
            .as_dict()
            .map_err(|_| PdfError::SaveError("Page object is not a dictionary".to_string()))?;

        let mut new_page_dict = page_dict.clone();
        new_page_dict.set(b"Contents", Object::Reference(contents_id));
        new_page_dict.set(b"Resources", Object::Dictionary(resources));
        self.inner.objects.insert(self.page_id, new_page_dict.into());

        self.inner.compress();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb() {
        let color = Color::from_rgb(255, 0, 0);
        assert_eq!(color, Color::red());
    }

    #[test]
    fn test_new_document_has_one_page() {
        let doc = PdfDocument::new().unwrap();
        assert_eq!(doc.inner.get_pages().len(), 1);
    }

    #[test]
    fn test_set_font_rejects_unknown_family() {
        let mut doc = PdfDocument::new().unwrap();
        assert!(doc.set_font("missing", 12.0).is_err());
    }

    #[test]
    fn test_font_resources_are_reused() {
        let mut doc = PdfDocument::new().unwrap();
        let first = doc.get_or_create_font_ref("Helvetica");
        let second = doc.get_or_create_font_ref("Helvetica");
        let bold = doc.get_or_create_font_ref("Helvetica-Bold");
        assert_eq!(first, second);
        assert_ne!(first, bold);
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut doc = PdfDocument::new().unwrap();
        doc.insert_text("", 10.0, 10.0, Align::Left).unwrap();
        assert!(doc.content.is_empty());
    }
}
