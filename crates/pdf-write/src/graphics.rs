//! Vector graphics operators
//!
//! Rectangles and lines are what the report layout needs: section title
//! bands, table row fills, borders and the header rule. Each generator
//! wraps its operators in q/Q so graphics state never leaks between
//! drawing calls.

use crate::document::Color;

/// Generate operators for a filled rectangle
///
/// # Arguments
/// * `x`, `y` - Lower-left corner in PDF coordinates (from bottom)
/// * `width`, `height` - Rectangle extent in points
/// * `color` - Fill color
pub fn fill_rect_operators(x: f64, y: f64, width: f64, height: f64, color: Color) -> Vec<u8> {
    format!(
        "q\n{} {} {} rg\n{x} {y} {width} {height} re\nf\nQ\n",
        color.r, color.g, color.b
    )
    .into_bytes()
}

/// Generate operators for a stroked rectangle outline
///
/// # Arguments
/// * `x`, `y` - Lower-left corner in PDF coordinates (from bottom)
/// * `width`, `height` - Rectangle extent in points
/// * `line_width` - Stroke width in points
/// * `color` - Stroke color
pub fn stroke_rect_operators(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    line_width: f64,
    color: Color,
) -> Vec<u8> {
    format!(
        "q\n{} {} {} RG\n{line_width} w\n{x} {y} {width} {height} re\nS\nQ\n",
        color.r, color.g, color.b
    )
    .into_bytes()
}

/// Generate operators for a straight line
///
/// # Arguments
/// * `x1`, `y1` - Start point in PDF coordinates (from bottom)
/// * `x2`, `y2` - End point in PDF coordinates (from bottom)
/// * `line_width` - Stroke width in points
/// * `color` - Stroke color
pub fn line_operators(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    line_width: f64,
    color: Color,
) -> Vec<u8> {
    format!(
        "q\n{} {} {} RG\n{line_width} w\n{x1} {y1} m\n{x2} {y2} l\nS\nQ\n",
        color.r, color.g, color.b
    )
    .into_bytes()
}
