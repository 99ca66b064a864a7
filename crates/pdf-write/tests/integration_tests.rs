//! Integration tests for pdf-write
//!
//! These tests verify end-to-end document construction with real PDF
//! serialization and re-parsing.

use lopdf::{Document, Object};
use pdf_write::{Align, Color, FontWeight, PdfDocument};

/// Build a small document exercising text and graphics
fn build_sample_document() -> Vec<u8> {
    let mut doc = PdfDocument::new().unwrap();

    doc.set_font("helvetica", 24.0).unwrap();
    doc.set_font_weight(FontWeight::Bold);
    doc.insert_text("Sample Title", 30.0, 54.0, Align::Left)
        .unwrap();

    doc.set_font_weight(FontWeight::Regular);
    doc.set_font_size(12.0);
    doc.set_text_color(Color::from_rgb(127, 140, 141));
    doc.insert_text("A subtitle line", 30.0, 73.0, Align::Left)
        .unwrap();

    doc.fill_rect(30.0, 100.0, 535.28, 32.0, Color::from_rgb(236, 240, 241));
    doc.stroke_rect(30.0, 150.0, 535.28, 90.0, 1.0, Color::black());
    doc.line(30.0, 83.0, 565.28, 83.0, 2.0, Color::black());

    doc.to_bytes().unwrap()
}

/// Extract the decompressed content stream of the first page
fn first_page_content(bytes: &[u8]) -> Vec<u8> {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    let page_id = pages[&1];

    let page_dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let contents_id = match page_dict.get(b"Contents").unwrap() {
        Object::Reference(id) => *id,
        other => panic!("Contents should be a reference, got {other:?}"),
    };

    let stream = doc.get_object(contents_id).unwrap().as_stream().unwrap();
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

#[test]
fn test_output_is_a_pdf() {
    let bytes = build_sample_document();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_output_parses_with_one_page() {
    let bytes = build_sample_document();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_content_stream_contains_text_and_graphics() {
    let bytes = build_sample_document();
    let content = String::from_utf8_lossy(&first_page_content(&bytes)).to_string();

    assert!(content.contains("BT"));
    assert!(content.contains("Tj"));
    assert!(content.contains("re"));
    // The title encodes to hex WinAnsi bytes
    assert!(content.contains("<53616D706C65205469746C65>"));
}

#[test]
fn test_fonts_are_registered_on_page() {
    let bytes = build_sample_document();
    let doc = Document::load_mem(&bytes).unwrap();
    let pages = doc.get_pages();
    let page_dict = doc.get_object(pages[&1]).unwrap().as_dict().unwrap();

    let resources = page_dict.get(b"Resources").unwrap().as_dict().unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();

    // Both Helvetica variants were used
    assert_eq!(fonts.iter().count(), 2);
}

#[test]
fn test_identical_documents_are_byte_identical() {
    let first = build_sample_document();
    let second = build_sample_document();
    assert_eq!(first, second);
}

#[test]
fn test_empty_document_still_serializes() {
    let mut doc = PdfDocument::new().unwrap();
    let bytes = doc.to_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(Document::load_mem(&bytes).is_ok());
}
