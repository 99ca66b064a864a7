//! Report rendering
//!
//! Serializes a block tree into a single-page A4 document. The layout is
//! fixed: positions and colors below mirror the report stylesheet, and no
//! attempt is made to measure content height or split across pages.

use crate::blocks::{
    build_blocks, Block, TableRow, COLUMN_LABELS, ITEMS_SECTION_TITLE, NOTES_SECTION_TITLE,
    TOTAL_LABEL,
};
use crate::schema::NormalizedReport;
use crate::Result;
use pdf_write::{Align, Color, FontWeight, PdfDocument, PAGE_HEIGHT, PAGE_WIDTH};
use std::io::Write;
use std::sync::Once;
use tracing::warn;

/// Page margin on every side, in points
const MARGIN: f64 = 30.0;

/// Usable content width
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const TITLE_SIZE: f32 = 24.0;
const SUBTITLE_SIZE: f32 = 14.0;
const INFO_SIZE: f32 = 12.0;
const SECTION_TITLE_SIZE: f32 = 16.0;
const CELL_SIZE: f32 = 10.0;
const NOTES_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 10.0;

/// Table row height in points
const ROW_HEIGHT: f64 = 30.0;

/// Baseline offset that vertically centers cell text in a row
const ROW_BASELINE: f64 = 19.0;

/// Height of a section title band (8pt padding around 16pt text)
const SECTION_TITLE_HEIGHT: f64 = 32.0;

/// Vertical gap below a finished section
const SECTION_GAP: f64 = 20.0;

/// Notes line height (1.5 x 12pt)
const NOTES_LINE_HEIGHT: f64 = 18.0;

/// Maximum characters per wrapped notes line
const NOTES_WRAP_CHARS: usize = 90;

fn dark() -> Color {
    Color::from_rgb(44, 62, 80)
}

fn slate() -> Color {
    Color::from_rgb(52, 73, 94)
}

fn gray() -> Color {
    Color::from_rgb(127, 140, 141)
}

fn light_band() -> Color {
    Color::from_rgb(236, 240, 241)
}

fn border() -> Color {
    Color::from_rgb(189, 195, 199)
}

static FONT_REGISTRATION: Once = Once::new();

/// Register the rendering fonts once per process
///
/// Best-effort: a failure is logged as a warning and never propagated; the
/// document builder falls back to lazy registration on first use.
pub fn register_fonts() {
    FONT_REGISTRATION.call_once(|| {
        if let Err(e) = pdf_write::register_standard_fonts() {
            warn!("could not register fonts: {e}");
        }
    });
}

/// Report renderer
///
/// Stateless; one instance can render any number of reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a report and return the document bytes
    pub fn render(&self, report: &NormalizedReport) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.render_into(report, &mut buffer)?;
        Ok(buffer)
    }

    /// Render a report into a writer
    ///
    /// The writer receives the serialized document in chunks as the
    /// underlying library produces them.
    pub fn render_into<W: Write>(&self, report: &NormalizedReport, writer: &mut W) -> Result<()> {
        let mut doc = PdfDocument::new()?;
        let mut cursor = MARGIN;

        for block in build_blocks(report) {
            cursor = self.render_block(&mut doc, &block, cursor)?;
        }

        doc.write_to(writer)?;
        Ok(())
    }

    /// Render a single block, returning the advanced cursor
    fn render_block(&self, doc: &mut PdfDocument, block: &Block, cursor: f64) -> Result<f64> {
        match block {
            Block::Header { title, date } => self.render_header(doc, title, date, cursor),
            Block::InfoRow { id, status } => self.render_info_row(doc, id, status, cursor),
            Block::ItemsTable { rows, total } => self.render_table(doc, rows, total, cursor),
            Block::Notes { text } => self.render_notes(doc, text, cursor),
            Block::Footer { caption } => {
                self.render_footer(doc, caption)?;
                Ok(cursor)
            }
        }
    }

    fn render_header(
        &self,
        doc: &mut PdfDocument,
        title: &str,
        date: &str,
        cursor: f64,
    ) -> Result<f64> {
        let mut y = cursor + TITLE_SIZE as f64;
        doc.set_font("helvetica", TITLE_SIZE)?;
        doc.set_font_weight(FontWeight::Bold);
        doc.set_text_color(dark());
        doc.insert_text(title, MARGIN, y, Align::Left)?;

        y += 5.0 + SUBTITLE_SIZE as f64;
        doc.set_font_size(SUBTITLE_SIZE);
        doc.set_font_weight(FontWeight::Regular);
        doc.set_text_color(gray());
        doc.insert_text(&format!("Generated on: {date}"), MARGIN, y, Align::Left)?;

        // 2pt rule closing the header
        y += 10.0;
        doc.line(MARGIN, y, PAGE_WIDTH - MARGIN, y, 2.0, dark());

        Ok(y + SECTION_GAP)
    }

    fn render_info_row(
        &self,
        doc: &mut PdfDocument,
        id: &str,
        status: &str,
        cursor: f64,
    ) -> Result<f64> {
        let y = cursor + INFO_SIZE as f64;
        doc.set_font_size(INFO_SIZE);
        doc.set_font_weight(FontWeight::Regular);
        doc.set_text_color(Color::black());
        doc.insert_text(&format!("Report ID: {id}"), MARGIN, y, Align::Left)?;
        doc.insert_text(
            &format!("Status: {status}"),
            PAGE_WIDTH - MARGIN,
            y,
            Align::Right,
        )?;

        Ok(y + SECTION_GAP)
    }

    /// Render a section title band, returning the cursor below it
    fn render_section_title(&self, doc: &mut PdfDocument, title: &str, cursor: f64) -> Result<f64> {
        doc.fill_rect(
            MARGIN,
            cursor,
            CONTENT_WIDTH,
            SECTION_TITLE_HEIGHT,
            light_band(),
        );
        doc.set_font_size(SECTION_TITLE_SIZE);
        doc.set_font_weight(FontWeight::Bold);
        doc.set_text_color(slate());
        doc.insert_text(
            title,
            MARGIN + 8.0,
            cursor + 8.0 + SECTION_TITLE_SIZE as f64,
            Align::Left,
        )?;

        Ok(cursor + SECTION_TITLE_HEIGHT + 10.0)
    }

    fn render_table(
        &self,
        doc: &mut PdfDocument,
        rows: &[TableRow],
        total: &str,
        cursor: f64,
    ) -> Result<f64> {
        let mut y = self.render_section_title(doc, ITEMS_SECTION_TITLE, cursor)?;
        let table_top = y;

        // Header row on a dark band
        doc.fill_rect(MARGIN, y, CONTENT_WIDTH, ROW_HEIGHT, slate());
        doc.set_font_size(CELL_SIZE);
        doc.set_font_weight(FontWeight::Bold);
        doc.set_text_color(Color::white());
        for (col, label) in COLUMN_LABELS.iter().enumerate() {
            self.insert_cell(doc, label, col, y)?;
        }
        doc.line(
            MARGIN,
            y + ROW_HEIGHT,
            MARGIN + CONTENT_WIDTH,
            y + ROW_HEIGHT,
            1.0,
            border(),
        );
        y += ROW_HEIGHT;

        // One row per item, in input order
        doc.set_font_weight(FontWeight::Regular);
        doc.set_text_color(Color::black());
        for row in rows {
            self.insert_cell(doc, &row.id, 0, y)?;
            self.insert_cell(doc, &row.name, 1, y)?;
            self.insert_cell(doc, &row.price, 2, y)?;
            self.insert_cell(doc, &row.quantity, 3, y)?;
            self.insert_cell(doc, &row.subtotal, 4, y)?;
            doc.line(
                MARGIN,
                y + ROW_HEIGHT,
                MARGIN + CONTENT_WIDTH,
                y + ROW_HEIGHT,
                1.0,
                border(),
            );
            y += ROW_HEIGHT;
        }

        // Trailing total row on a light band
        doc.fill_rect(MARGIN, y, CONTENT_WIDTH, ROW_HEIGHT, light_band());
        doc.set_font_weight(FontWeight::Bold);
        self.insert_cell(doc, TOTAL_LABEL, 3, y)?;
        self.insert_cell(doc, total, 4, y)?;
        y += ROW_HEIGHT;

        doc.stroke_rect(MARGIN, table_top, CONTENT_WIDTH, y - table_top, 1.0, border());

        Ok(y + SECTION_GAP)
    }

    /// Insert one table cell
    ///
    /// The name column is left-aligned with cell padding, all other columns
    /// are centered, matching the report stylesheet.
    fn insert_cell(
        &self,
        doc: &mut PdfDocument,
        text: &str,
        col: usize,
        row_top: f64,
    ) -> Result<()> {
        let col_width = CONTENT_WIDTH / COLUMN_LABELS.len() as f64;
        let x = MARGIN + col as f64 * col_width;
        let y = row_top + ROW_BASELINE;

        if col == 1 {
            doc.insert_text(text, x + 8.0, y, Align::Left)?;
        } else {
            doc.insert_text(text, x + col_width / 2.0, y, Align::Center)?;
        }
        Ok(())
    }

    fn render_notes(&self, doc: &mut PdfDocument, text: &str, cursor: f64) -> Result<f64> {
        let mut y = self.render_section_title(doc, NOTES_SECTION_TITLE, cursor)?;

        doc.set_font_size(NOTES_SIZE);
        doc.set_font_weight(FontWeight::Regular);
        doc.set_text_color(Color::black());
        for line in pdf_write::simple_word_wrap(text, NOTES_WRAP_CHARS) {
            doc.insert_text(&line, MARGIN, y + NOTES_SIZE as f64, Align::Left)?;
            y += NOTES_LINE_HEIGHT;
        }

        Ok(y + SECTION_GAP)
    }

    fn render_footer(&self, doc: &mut PdfDocument, caption: &str) -> Result<()> {
        doc.set_font_size(FOOTER_SIZE);
        doc.set_font_weight(FontWeight::Regular);
        doc.set_text_color(gray());
        doc.insert_text(caption, PAGE_WIDTH / 2.0, PAGE_HEIGHT - MARGIN, Align::Center)?;
        Ok(())
    }
}
