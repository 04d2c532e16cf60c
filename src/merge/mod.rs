//! Sequential PDF concatenation.
//!
//! Inputs are loaded one at a time and their pages moved into a single
//! accumulating document, so at most one parsed source is alive next to the
//! output at any moment.
//!
//! # Examples
//!
//! ```no_run
//! use pdfstitch::config::MergeRequest;
//! use pdfstitch::merge::PdfMerger;
//! use pdfstitch::output::MergeEvent;
//! use std::path::PathBuf;
//!
//! # fn example() -> pdfstitch::Result<()> {
//! let request = MergeRequest::new(
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     PathBuf::from("merged.pdf"),
//! )?;
//!
//! let mut events: Vec<MergeEvent> = Vec::new();
//! let summary = PdfMerger::new().merge(&request, &mut events)?;
//! println!("{} pages", summary.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;
pub mod pages;

pub use merger::{MergeSummary, PdfMerger};
pub use pages::PageAccumulator;
