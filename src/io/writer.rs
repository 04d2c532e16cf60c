//! PDF writing and saving operations.
//!
//! The writer prepares the document for output and then writes it:
//! - Unreachable objects are pruned and the rest renumbered
//! - Streams are compressed
//! - Bytes go to a temporary sibling that is synced and renamed into place,
//!   so the output path never holds a half-written file
//!
//! # Examples
//!
//! ```no_run
//! use pdfstitch::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> pdfstitch::Result<()> {
//! let stats = PdfWriter::new().save(&mut doc, Path::new("output.pdf"))?;
//! println!("wrote {} bytes", stats.file_size);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfStitchError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary sibling, then rename over the output path.
    pub atomic: bool,

    /// Compress streams before writing.
    pub compress: bool,

    /// Drop objects not reachable from the trailer, then renumber.
    pub prune_unreachable: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            prune_unreachable: true,
            buffer_size: 64 * 1024,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to prepare and write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Number of unreachable objects removed.
    pub pruned_objects: usize,
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Prepare `doc` according to the options and save it to `path`.
    ///
    /// Parent directories are created if needed. When this returns `Ok`, the
    /// file is complete and synced to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output (or its temporary sibling) cannot be created
    /// - Serialization, flushing or syncing fails (e.g. disk full)
    /// - The final rename fails
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let pruned_objects = self.prepare(doc);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| {
                PdfStitchError::FailedToCreateOutput {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }

        let write_path = if self.options.atomic {
            temporary_sibling(path)
        } else {
            path.to_path_buf()
        };

        if let Err(err) = self.write_file(doc, &write_path) {
            if self.options.atomic {
                let _ = std::fs::remove_file(&write_path);
            }
            return Err(err);
        }

        if self.options.atomic {
            std::fs::rename(&write_path, path).map_err(|source| {
                let _ = std::fs::remove_file(&write_path);
                PdfStitchError::FailedToWrite {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
            pruned_objects,
        })
    }

    /// Apply cleanup and compression. Returns the number of pruned objects.
    fn prepare(&self, doc: &mut Document) -> usize {
        let mut pruned = 0;

        if self.options.prune_unreachable {
            pruned = doc.prune_objects().len();
            doc.renumber_objects();
        }

        if self.options.compress {
            doc.compress();
        }

        pruned
    }

    fn write_file(&self, doc: &mut Document, write_path: &Path) -> Result<()> {
        let file =
            File::create(write_path).map_err(|source| PdfStitchError::FailedToCreateOutput {
                path: write_path.to_path_buf(),
                source,
            })?;

        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|err| PdfStitchError::FailedToWrite {
                path: write_path.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        let file = writer
            .into_inner()
            .map_err(|err| PdfStitchError::FailedToWrite {
                path: write_path.to_path_buf(),
                source: err.into_error(),
            })?;

        file.sync_all().map_err(|source| PdfStitchError::FailedToWrite {
            path: write_path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

/// `out.pdf` -> `.out.pdf.partial` in the same directory, so the rename
/// stays on one filesystem.
fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| "output".as_ref()));
    name.push(".partial");
    path.with_file_name(name)
}
