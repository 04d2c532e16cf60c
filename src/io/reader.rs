//! PDF reading and loading operations.
//!
//! Loading is synchronous and one document at a time. A [`LoadedPdf`] owns
//! its parsed [`Document`]; dropping it releases everything the parser
//! allocated for that file.
//!
//! # Examples
//!
//! ```no_run
//! use pdfstitch::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> pdfstitch::Result<()> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf"))?;
//! println!("{} pages, {} bytes", loaded.page_count, loaded.file_size);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfStitchError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to parse the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a reader.
    pub fn new() -> Self {
        Self
    }

    /// Check that `path` names an existing, readable regular file and return
    /// its size in bytes.
    ///
    /// # Errors
    ///
    /// - [`PdfStitchError::FileNotFound`] if nothing exists at `path`
    /// - [`PdfStitchError::NotAFile`] if `path` is a directory or similar
    /// - [`PdfStitchError::FileNotAccessible`] for other stat failures
    pub fn check_path(&self, path: &Path) -> Result<u64> {
        let metadata = std::fs::metadata(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => PdfStitchError::file_not_found(path.to_path_buf()),
            _ => PdfStitchError::FileNotAccessible {
                path: path.to_path_buf(),
                source: err,
            },
        })?;

        if !metadata.is_file() {
            return Err(PdfStitchError::not_a_file(path.to_path_buf()));
        }

        Ok(metadata.len())
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not name a readable file
    /// - The file is not a valid PDF
    /// - The PDF is encrypted
    ///
    /// A document with no pages loads successfully with `page_count == 0`.
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let file_size = self.check_path(path)?;
        let path_buf = path.to_path_buf();

        let start = Instant::now();

        let document = Document::load(path).map_err(|err| {
            let message = err.to_string();
            if message.contains("encrypt") || message.contains("password") {
                PdfStitchError::encrypted_pdf(path_buf.clone())
            } else {
                PdfStitchError::failed_to_load_pdf(path_buf.clone(), message)
            }
        })?;

        let page_count = document.get_pages().len();
        let load_time = start.elapsed();

        tracing::debug!(
            path = %path.display(),
            pages = page_count,
            bytes = file_size,
            version = %document.version,
            elapsed_ms = load_time.as_millis() as u64,
            "loaded PDF"
        );

        Ok(LoadedPdf {
            document,
            path: path_buf,
            page_count,
            load_time,
            file_size,
        })
    }
}
