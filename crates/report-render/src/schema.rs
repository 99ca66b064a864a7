//! Report data types

/// Default title when the input does not carry one
pub const DEFAULT_TITLE: &str = "Report";

/// Default report identifier
pub const DEFAULT_ID: &str = "N/A";

/// Default report status
pub const DEFAULT_STATUS: &str = "Completed";

/// One line item of a report
///
/// Fields stay optional here; the element-level defaults (price 0,
/// quantity 1) are applied when the table rows are built, not during
/// normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportItem {
    /// Item identifier, any scalar value
    pub id: Option<serde_json::Value>,

    /// Item name
    pub name: Option<String>,

    /// Unit price
    pub unit_price: Option<f64>,

    /// Quantity
    pub quantity: Option<f64>,
}

/// A fully defaulted, render-ready report
///
/// Invariant: every field is present and well-typed. Produced by
/// [`crate::normalize`]; never constructed from raw input directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReport {
    /// Report title
    pub title: String,

    /// Generation date, already formatted for display
    pub date: String,

    /// Report identifier
    pub id: String,

    /// Report status
    pub status: String,

    /// Line items; empty when the input carried none (or a malformed value)
    pub items: Vec<ReportItem>,

    /// Report total as supplied by the caller, 0 when absent or falsy
    ///
    /// Never recomputed from the items; the table's total row shows this
    /// value verbatim even when it disagrees with the line subtotals.
    pub total: f64,

    /// Free-form notes; empty string suppresses the notes section
    pub notes: String,
}
