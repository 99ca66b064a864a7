//! Built-in standard fonts for PDF documents
//!
//! The documents produced by this crate use the PDF standard fonts, which
//! every conforming reader ships with. No font program is embedded; text is
//! encoded as WinAnsi and measured against the compiled-in AFM width tables
//! below.

use crate::{PdfError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// First character covered by the width tables
const FIRST_CHAR: u8 = 32;

/// Glyph widths for Helvetica, chars 32..=126, in 1/1000 em units (AFM)
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Glyph widths for Helvetica-Bold, chars 32..=126, in 1/1000 em units (AFM)
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Metrics for one standard font variant
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// The PDF BaseFont name (e.g. "Helvetica-Bold")
    pub base_font: &'static str,
    widths: &'static [u16; 95],
}

impl FontMetrics {
    /// Width of a single encoded byte in 1/1000 em units
    ///
    /// Bytes outside the covered range fall back to the width of `?`,
    /// matching the replacement performed by [`encode_winansi`].
    pub fn byte_width(&self, byte: u8) -> u16 {
        if (FIRST_CHAR..=126).contains(&byte) {
            self.widths[(byte - FIRST_CHAR) as usize]
        } else {
            self.widths[(b'?' - FIRST_CHAR) as usize]
        }
    }

    /// Width of a string in points at the given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f64 {
        let units: u64 = encode_winansi(text)
            .iter()
            .map(|&b| self.byte_width(b) as u64)
            .sum();
        units as f64 * font_size as f64 / 1000.0
    }

    fn validate(&self) -> Result<()> {
        if self.base_font.is_empty() {
            return Err(PdfError::InvalidFontTable("empty BaseFont name".into()));
        }
        if self.widths.iter().any(|&w| w == 0) {
            return Err(PdfError::InvalidFontTable(format!(
                "{} has a zero-width glyph entry",
                self.base_font
            )));
        }
        Ok(())
    }
}

/// A font family with regular and bold variants
#[derive(Debug, Clone, Copy)]
pub struct FontFamily {
    pub regular: FontMetrics,
    pub bold: FontMetrics,
}

impl FontFamily {
    /// Get the metrics for the requested weight
    pub fn variant(&self, weight: FontWeight) -> &FontMetrics {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Catalog of registered font families, keyed by family identifier
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    families: HashMap<String, FontFamily>,
}

impl FontCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog of standard fonts
    ///
    /// Registers the Helvetica family. The width tables are validated so a
    /// broken build of this crate fails here, at registration, instead of
    /// producing misaligned documents.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.register_family(
            "helvetica",
            FontFamily {
                regular: FontMetrics {
                    base_font: "Helvetica",
                    widths: &HELVETICA_WIDTHS,
                },
                bold: FontMetrics {
                    base_font: "Helvetica-Bold",
                    widths: &HELVETICA_BOLD_WIDTHS,
                },
            },
        )?;
        Ok(catalog)
    }

    /// Register a font family under an identifier
    pub fn register_family(&mut self, name: &str, family: FontFamily) -> Result<()> {
        if self.families.contains_key(name) {
            return Err(PdfError::FontAlreadyExists(name.to_string()));
        }
        family.regular.validate()?;
        family.bold.validate()?;
        self.families.insert(name.to_string(), family);
        Ok(())
    }

    /// Look up a family by identifier
    pub fn family(&self, name: &str) -> Result<&FontFamily> {
        self.families
            .get(name)
            .ok_or_else(|| PdfError::FontNotFound(name.to_string()))
    }
}

static CATALOG: OnceLock<FontCatalog> = OnceLock::new();

/// Register the standard font catalog for the whole process
///
/// Idempotent; the first successful registration wins. Documents created
/// before any registration register the catalog lazily on first use.
pub fn register_standard_fonts() -> Result<()> {
    let catalog = FontCatalog::standard()?;
    let _ = CATALOG.set(catalog);
    Ok(())
}

/// The process-wide font catalog, registering it if needed
pub(crate) fn catalog() -> Result<&'static FontCatalog> {
    if CATALOG.get().is_none() {
        register_standard_fonts()?;
    }
    CATALOG
        .get()
        .ok_or_else(|| PdfError::FontNotFound("standard font catalog".to_string()))
}

/// Encode a string as WinAnsi bytes
///
/// Characters without a WinAnsi codepoint in the covered range are replaced
/// with `?` so the output stays renderable with the standard fonts.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_catalog_registers_helvetica() {
        let catalog = FontCatalog::standard().unwrap();
        let family = catalog.family("helvetica").unwrap();
        assert_eq!(family.regular.base_font, "Helvetica");
        assert_eq!(family.bold.base_font, "Helvetica-Bold");
    }

    #[test]
    fn test_unknown_family_errors() {
        let catalog = FontCatalog::standard().unwrap();
        assert!(matches!(
            catalog.family("sarabun"),
            Err(PdfError::FontNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_registration_errors() {
        let mut catalog = FontCatalog::standard().unwrap();
        let family = *catalog.family("helvetica").unwrap();
        assert!(matches!(
            catalog.register_family("helvetica", family),
            Err(PdfError::FontAlreadyExists(_))
        ));
    }

    #[test]
    fn test_byte_width_known_glyphs() {
        let catalog = FontCatalog::standard().unwrap();
        let regular = catalog.family("helvetica").unwrap().regular;
        assert_eq!(regular.byte_width(b' '), 278);
        assert_eq!(regular.byte_width(b'0'), 556);
        assert_eq!(regular.byte_width(b'W'), 944);
        // Out of range falls back to '?'
        assert_eq!(regular.byte_width(200), regular.byte_width(b'?'));
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let catalog = FontCatalog::standard().unwrap();
        let regular = catalog.family("helvetica").unwrap().regular;
        // "00" at 10pt: 2 * 556 / 1000 * 10 = 11.12
        let width = regular.text_width_points("00", 10.0);
        assert!((width - 11.12).abs() < 1e-9);
        assert_eq!(regular.text_width_points("", 10.0), 0.0);
    }

    #[test]
    fn test_encode_winansi_replaces_unmapped() {
        assert_eq!(encode_winansi("A1!"), b"A1!".to_vec());
        assert_eq!(encode_winansi("a\u{0e01}b"), b"a?b".to_vec());
    }

    #[test]
    fn test_register_standard_fonts_idempotent() {
        register_standard_fonts().unwrap();
        register_standard_fonts().unwrap();
        assert!(catalog().is_ok());
    }
}
