//! PDF input/output.
//!
//! - [`reader`]: path checks and lopdf loading
//! - [`writer`]: cleanup, compression and atomic saving

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
