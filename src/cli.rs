//! CLI argument parsing for pdfstitch.
//!
//! Two subcommands mirror the two operations:
//!
//! ```text
//! pdfstitch info <PATH>...
//! pdfstitch merge '<JSON array of paths>' <OUTPUT>
//! ```
//!
//! Results go to stdout as JSON lines; diagnostics go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, MergeRequest, Operation, Verbosity};
use crate::error::Result;

/// Inspect PDF files and concatenate them into a single document.
///
/// Every result is printed to stdout as one JSON object per line so a
/// supervising process can consume it incrementally.
#[derive(Parser, Debug)]
#[command(name = "pdfstitch")]
#[command(version)]
#[command(about = "Inspect and merge PDF files, reporting as JSON lines", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Commands,

    /// Log per-file detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log only errors to stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory containing the PDFium shared library
    ///
    /// Used for rendering previews. When omitted, the library is loaded
    /// from the system library path.
    #[arg(long, global = true, value_name = "DIR")]
    pub pdfium_lib: Option<PathBuf>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report page count, size and a first-page preview for each file
    ///
    /// Prints one JSON line per path. A file that cannot be read produces
    /// {"error": "..."} on its line and does not affect the others; the exit
    /// code is 0 either way.
    Info {
        /// PDF files to inspect
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },

    /// Concatenate PDFs in order into one output file
    ///
    /// Prints {"type":"progress","value":N} after each input and
    /// {"type":"success","path":"..."} once the output is written.
    ///
    /// Example:
    ///   pdfstitch merge '["a.pdf", "b.pdf"]' merged.pdf
    Merge {
        /// JSON array of input paths, in output order
        #[arg(value_name = "JSON_PATHS")]
        inputs: String,

        /// Output PDF file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

impl Cli {
    /// Convert parsed arguments into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a usage error if the merge input list is not a non-empty JSON
    /// array of strings, or if validation fails.
    pub fn to_config(&self) -> Result<Config> {
        let operation = match &self.command {
            Commands::Info { paths } => Operation::Info {
                paths: paths.clone(),
            },
            Commands::Merge { inputs, output } => {
                Operation::Merge(MergeRequest::from_json(inputs, output.clone())?)
            }
        };

        let config = Config {
            operation,
            verbosity: Verbosity::from_flags(self.quiet, self.verbose),
            pdfium_library: self.pdfium_lib.clone(),
        };

        config.validate()?;

        Ok(config)
    }
}
