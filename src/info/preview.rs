//! First-page previews.
//!
//! Rasterization goes through the [`PageRenderer`] trait. The production
//! implementation, [`PdfiumRenderer`], binds to a PDFium shared library the
//! first time it is asked to render.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};
use pdfium_render::prelude::*;
use std::cell::OnceCell;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{PdfStitchError, Result};

/// Page count and first-page raster of one document.
#[derive(Debug, Clone)]
pub struct RenderedPreview {
    /// Number of pages in the document.
    pub page_count: usize,
    /// Page 1, or `None` when the document has no pages.
    pub image: Option<DynamicImage>,
}

/// Opens a PDF file once to count its pages and rasterize page 1.
pub trait PageRenderer {
    /// Open the document at `path`, count its pages and render page 1 scaled
    /// by `scale` relative to its size in points.
    ///
    /// Any document handle opened for this call must be released before it
    /// returns.
    fn render_preview(&self, path: &Path, scale: f32) -> Result<RenderedPreview>;
}

impl<R: PageRenderer + ?Sized> PageRenderer for &R {
    fn render_preview(&self, path: &Path, scale: f32) -> Result<RenderedPreview> {
        (**self).render_preview(path, scale)
    }
}

/// PDFium-backed renderer.
///
/// Binding is deferred to the first render and its outcome is cached, so a
/// missing library costs one lookup per process and is reported as a
/// [`PdfStitchError::RendererUnavailable`] for every file.
pub struct PdfiumRenderer {
    library_dir: Option<PathBuf>,
    pdfium: OnceCell<std::result::Result<Pdfium, String>>,
}

impl PdfiumRenderer {
    /// Renderer that loads PDFium from `library_dir`, or from the system
    /// library path when `None`.
    pub fn new(library_dir: Option<PathBuf>) -> Self {
        Self {
            library_dir,
            pdfium: OnceCell::new(),
        }
    }

    fn pdfium(&self) -> Result<&Pdfium> {
        self.pdfium
            .get_or_init(|| bind_pdfium(self.library_dir.as_deref()))
            .as_ref()
            .map_err(|reason| PdfStitchError::RendererUnavailable {
                reason: reason.clone(),
            })
    }
}

fn bind_pdfium(library_dir: Option<&Path>) -> std::result::Result<Pdfium, String> {
    let bindings = match library_dir {
        Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            .map_err(|e| format!("failed to load PDFium from {}: {e}", dir.display()))?,
        None => Pdfium::bind_to_system_library()
            .map_err(|e| format!("failed to load system PDFium library: {e}"))?,
    };

    tracing::debug!("bound PDFium library");
    Ok(Pdfium::new(bindings))
}

impl PageRenderer for PdfiumRenderer {
    fn render_preview(&self, path: &Path, scale: f32) -> Result<RenderedPreview> {
        let pdfium = self.pdfium()?;

        let document = pdfium.load_pdf_from_file(path, None).map_err(|e| {
            let message = e.to_string();
            if message.contains("Password") || message.contains("password") {
                PdfStitchError::encrypted_pdf(path.to_path_buf())
            } else {
                PdfStitchError::failed_to_load_pdf(path.to_path_buf(), message)
            }
        })?;

        let pages = document.pages();
        let page_count = pages.len() as usize;
        if page_count == 0 {
            return Ok(RenderedPreview {
                page_count,
                image: None,
            });
        }

        let page = pages
            .get(0)
            .map_err(|e| PdfStitchError::render_failed(path.to_path_buf(), e.to_string()))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PdfStitchError::render_failed(path.to_path_buf(), e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            pages = page_count,
            width = bitmap.width(),
            height = bitmap.height(),
            "rendered preview"
        );

        Ok(RenderedPreview {
            page_count,
            image: Some(bitmap.as_image()),
        })
    }
}

/// Encode `image` as PNG and return the bytes as standard, padded base64.
pub fn encode_png_base64(image: &DynamicImage) -> Result<String> {
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| PdfStitchError::PreviewEncodingFailed {
            reason: e.to_string(),
        })?;

    Ok(STANDARD.encode(png))
}
