//! Report block tree
//!
//! The fixed report layout is described as a tagged block tree built by a
//! pure function from a [`NormalizedReport`]. The tree carries only display
//! strings; turning it into PDF operators is the renderer's job.

use crate::normalize::{is_truthy, value_to_string};
use crate::schema::{NormalizedReport, ReportItem};

/// Section title above the items table
pub const ITEMS_SECTION_TITLE: &str = "Item Details";

/// Section title above the notes text
pub const NOTES_SECTION_TITLE: &str = "Additional Notes";

/// Column labels of the items table, in order
pub const COLUMN_LABELS: [&str; 5] = ["ID", "Name", "Price", "Quantity", "Subtotal"];

/// Label of the trailing total row
pub const TOTAL_LABEL: &str = "TOTAL:";

/// Fixed footer caption, identical on every document
pub const FOOTER_CAPTION: &str = "Page 1 of 1 - Generated automatically by reportd";

/// One content block of the report page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Large title with the generation date subtitle
    Header { title: String, date: String },

    /// Report id and status, side by side
    InfoRow { id: String, status: String },

    /// Itemized table with a trailing total row
    ItemsTable { rows: Vec<TableRow>, total: String },

    /// Free-form notes section
    Notes { text: String },

    /// Fixed page footer
    Footer { caption: String },
}

/// Display cells of one table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub subtotal: String,
}

/// Build the block tree for a report
///
/// Pure: the same report always yields the same tree. The items table is
/// present only when there is at least one item, the notes block only when
/// the notes text is non-empty; header, info row and footer always render.
pub fn build_blocks(report: &NormalizedReport) -> Vec<Block> {
    let mut blocks = vec![
        Block::Header {
            title: report.title.clone(),
            date: report.date.clone(),
        },
        Block::InfoRow {
            id: report.id.clone(),
            status: report.status.clone(),
        },
    ];

    if !report.items.is_empty() {
        blocks.push(Block::ItemsTable {
            rows: report.items.iter().map(build_row).collect(),
            // The supplied total, verbatim; never the sum of the rows
            total: format!("${}", format_number(report.total)),
        });
    }

    if !report.notes.is_empty() {
        blocks.push(Block::Notes {
            text: report.notes.clone(),
        });
    }

    blocks.push(Block::Footer {
        caption: FOOTER_CAPTION.to_string(),
    });

    blocks
}

/// Build the display cells for one item
///
/// Element-level defaults happen here: a falsy price renders as 0, a falsy
/// quantity as 1, and the subtotal is always forced to two decimals.
fn build_row(item: &ReportItem) -> TableRow {
    let price = item.unit_price.unwrap_or(0.0);
    let quantity = match item.quantity {
        Some(q) if q != 0.0 => q,
        _ => 1.0,
    };

    TableRow {
        id: match &item.id {
            Some(v) if is_truthy(v) => value_to_string(v),
            _ => String::new(),
        },
        name: item.name.clone().unwrap_or_default(),
        price: format!("${}", format_number(price)),
        quantity: format_number(quantity),
        subtotal: format!("${:.2}", price * quantity),
    }
}

/// Format a number the way the report displays it
///
/// Integral values print without a decimal point (750 -> "750"), others
/// with their shortest representation (99.5 -> "99.5").
fn format_number(n: f64) -> String {
    format!("{n}")
}
