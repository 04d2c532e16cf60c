//! Per-file metadata and preview retrieval.
//!
//! Every failure here is per file: [`InfoRetriever::report`] turns it into an
//! [`InfoReport::Error`] value instead of propagating it, so one unreadable
//! file never stops a caller that is inspecting many.
//!
//! # Examples
//!
//! ```no_run
//! use pdfstitch::info::{InfoRetriever, PdfiumRenderer};
//! use std::path::Path;
//!
//! let retriever = InfoRetriever::new(PdfiumRenderer::new(None));
//! let report = retriever.report(Path::new("document.pdf"));
//! println!("{}", serde_json::to_string(&report).unwrap());
//! ```

pub mod preview;

pub use preview::{PageRenderer, PdfiumRenderer, RenderedPreview, encode_png_base64};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PdfStitchError, Result};
use crate::io::PdfReader;
use crate::utils::{file_name, format_megabytes};

/// Scale applied to page 1 when rendering the preview.
pub const PREVIEW_SCALE: f32 = 0.15;

/// Metadata and preview for one PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// The path exactly as requested.
    pub path: String,
    /// Final path component.
    pub name: String,
    /// Number of pages.
    pub pages: usize,
    /// Size in megabytes with one decimal, e.g. `"1.0 MB"`.
    pub size: String,
    /// Base64-encoded PNG of page 1.
    pub preview: String,
}

/// Outcome of an info request, serialized either as the [`FileInfo`] object
/// or as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoReport {
    /// The file was inspected successfully.
    Ok(FileInfo),
    /// The file could not be inspected.
    Error {
        /// Human-readable reason.
        error: String,
    },
}

impl From<Result<FileInfo>> for InfoReport {
    fn from(result: Result<FileInfo>) -> Self {
        match result {
            Ok(info) => Self::Ok(info),
            Err(err) => Self::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Stats files for their size and asks `R` for the page count and preview.
pub struct InfoRetriever<R> {
    reader: PdfReader,
    renderer: R,
}

impl<R: PageRenderer> InfoRetriever<R> {
    /// Create a retriever that renders previews with `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            reader: PdfReader::new(),
            renderer,
        }
    }

    /// Inspect one file.
    ///
    /// The document is opened once, by the renderer, which also supplies the
    /// page count. The renderer closes its handle before returning, so
    /// nothing stays open on return.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is missing or unreadable, the file is not
    /// a valid PDF, the PDF has no pages, or the preview cannot be produced.
    pub fn retrieve(&self, path: &Path) -> Result<FileInfo> {
        let bytes = self.reader.check_path(path)?;

        let rendered = self.renderer.render_preview(path, PREVIEW_SCALE)?;
        if rendered.page_count == 0 {
            return Err(PdfStitchError::corrupted_pdf(
                path.to_path_buf(),
                "PDF has no pages",
            ));
        }

        let image = rendered
            .image
            .filter(|image| image.width() > 0 && image.height() > 0)
            .ok_or_else(|| {
                PdfStitchError::render_failed(path.to_path_buf(), "renderer produced an empty image")
            })?;
        let preview = encode_png_base64(&image)?;

        Ok(FileInfo {
            path: path.to_string_lossy().into_owned(),
            name: file_name(path),
            pages: rendered.page_count,
            size: format_megabytes(bytes),
            preview,
        })
    }

    /// Inspect one file, converting any failure into an error report.
    pub fn report(&self, path: &Path) -> InfoReport {
        let result = self.retrieve(path);

        match &result {
            Ok(info) => tracing::debug!(path = %path.display(), pages = info.pages, "inspected"),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "inspection failed"),
        }

        result.into()
    }
}
