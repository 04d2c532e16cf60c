//! Shared helpers for integration tests.
//!
//! Fixtures are generated with lopdf into a temporary directory instead of
//! being checked in, so every test controls its own page counts and text.

#![allow(dead_code)]

use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Text drawn on page `index` (1-based) of a fixture tagged `label`.
pub fn page_marker(label: &str, index: u32) -> String {
    format!("{label}-Page-{index}")
}

/// Build an in-memory PDF whose pages each carry their own MediaBox,
/// resources and a content stream naming `label` and the page number.
pub fn build_pdf(label: &str, pages: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for index in 1..=pages {
        let content = format!(
            "BT /F1 18 Tf 72 720 Td ({}) Tj ET",
            page_marker(label, index)
        );
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Write a generated PDF named `<label>.pdf` into `dir`.
pub fn write_pdf(dir: &Path, label: &str, pages: u32) -> PathBuf {
    let path = dir.join(format!("{label}.pdf"));
    let mut doc = build_pdf(label, pages);
    doc.save(&path).expect("Failed to write fixture PDF");
    path
}

/// Fresh temporary directory, removed when dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Text of every page of the PDF at `path`, in page order.
pub fn page_texts(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load output PDF");
    doc.get_pages()
        .into_values()
        .map(|id| {
            let bytes = doc.get_page_content(id).expect("Failed to read page content");
            String::from_utf8_lossy(&bytes).into_owned()
        })
        .collect()
}

/// Parse each non-empty line of `output` as JSON.
pub fn json_lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
        .collect()
}
