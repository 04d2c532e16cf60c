//! # pdfstitch
//!
//! Inspect PDF files and concatenate them into one document, reporting
//! every result as a JSON line on stdout.
//!
//! Two operations are available:
//!
//! - **info**: page count, file size and a small PNG preview of page 1 for
//!   each file. Per-file failures become `{"error": "..."}` lines.
//! - **merge**: append every page of every input, in order, into a new
//!   file, emitting `{"type":"progress","value":N}` after each input and
//!   `{"type":"success","path":"..."}` at the end. Any failure aborts the
//!   merge.
//!
//! # Examples
//!
//! ```no_run
//! use pdfstitch::config::{Config, MergeRequest, Operation, Verbosity};
//! use std::path::PathBuf;
//!
//! # fn example() -> pdfstitch::Result<()> {
//! let config = Config {
//!     operation: Operation::Merge(MergeRequest::new(
//!         vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!         PathBuf::from("merged.pdf"),
//!     )?),
//!     verbosity: Verbosity::Normal,
//!     pdfium_library: None,
//! };
//!
//! pdfstitch::run(&config, std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod info;
pub mod io;
pub mod logging;
pub mod merge;
pub mod output;
pub(crate) mod utils;

pub use config::Config;
pub use error::{PdfStitchError, Result};

use std::io::Write;
use std::path::PathBuf;

use crate::config::Operation;
use crate::info::{InfoRetriever, PageRenderer, PdfiumRenderer};
use crate::merge::PdfMerger;
use crate::output::JsonLines;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Execute the operation described by `config`, writing JSON lines to `out`.
///
/// # Errors
///
/// Info never fails because of an individual file; it only fails if `out`
/// cannot be written. Merge fails on the first problem with any input or
/// with the output.
pub fn run<W: Write>(config: &Config, out: W) -> Result<()> {
    match &config.operation {
        Operation::Info { paths } => {
            let renderer = PdfiumRenderer::new(config.pdfium_library.clone());
            report_info(&InfoRetriever::new(renderer), paths, out)
        }
        Operation::Merge(request) => {
            let summary = PdfMerger::new().merge(request, JsonLines::new(out))?;
            tracing::debug!(
                files = summary.files_merged,
                pages = summary.total_pages,
                input_bytes = summary.input_size,
                output_bytes = summary.output_size,
                elapsed_ms = summary.elapsed.as_millis() as u64,
                "merge complete"
            );
            Ok(())
        }
    }
}

/// Write one info report line per path, in order.
///
/// # Errors
///
/// Returns [`PdfStitchError::EventOutput`] if a line cannot be written.
pub fn report_info<R: PageRenderer, W: Write>(
    retriever: &InfoRetriever<R>,
    paths: &[PathBuf],
    out: W,
) -> Result<()> {
    let mut lines = JsonLines::new(out);
    for path in paths {
        lines.write_line(&retriever.report(path))?;
    }
    Ok(())
}
