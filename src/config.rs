//! Configuration for a single pdfstitch invocation.
//!
//! The command line is the only source of configuration: there are no config
//! files and no environment variables. [`crate::cli::Cli`] parses arguments
//! and produces a [`Config`], which is validated before anything touches the
//! filesystem.

use std::path::PathBuf;

use crate::error::{PdfStitchError, Result};

/// How much diagnostic logging goes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Per-file debug detail.
    Verbose,
}

impl Verbosity {
    /// Build from the `--quiet` / `--verbose` flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// tracing filter directive for this verbosity.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
        }
    }
}

/// An ordered list of input PDFs and the path the merged PDF goes to.
///
/// Order is significant and duplicates are kept: a path listed twice
/// contributes its pages twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Input files, in output page order.
    pub inputs: Vec<PathBuf>,
    /// Destination of the merged document.
    pub output: PathBuf,
}

impl MergeRequest {
    /// Create a request, rejecting an empty input list.
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Result<Self> {
        if inputs.is_empty() {
            return Err(PdfStitchError::NoFilesToMerge);
        }
        Ok(Self { inputs, output })
    }

    /// Create a request from a JSON array of path strings.
    ///
    /// # Errors
    ///
    /// Returns [`PdfStitchError::InvalidInputList`] if `inputs_json` is not a
    /// JSON array of strings, and [`PdfStitchError::NoFilesToMerge`] if the
    /// array is empty.
    pub fn from_json(inputs_json: &str, output: PathBuf) -> Result<Self> {
        let inputs: Vec<PathBuf> = serde_json::from_str::<Vec<String>>(inputs_json)
            .map_err(|err| {
                PdfStitchError::invalid_input_list(format!(
                    "expected a JSON array of path strings: {err}"
                ))
            })?
            .into_iter()
            .map(PathBuf::from)
            .collect();

        if let Some(position) = inputs.iter().position(|p| p.as_os_str().is_empty()) {
            return Err(PdfStitchError::invalid_input_list(format!(
                "entry {} is an empty path",
                position + 1
            )));
        }

        Self::new(inputs, output)
    }
}

/// What the invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Report metadata and a preview for each path, one JSON line per path.
    Info {
        /// Files to inspect.
        paths: Vec<PathBuf>,
    },
    /// Concatenate the inputs into one document.
    Merge(MergeRequest),
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The operation to perform.
    pub operation: Operation,
    /// stderr log level.
    pub verbosity: Verbosity,
    /// Directory holding the PDFium shared library, if not on the system path.
    pub pdfium_library: Option<PathBuf>,
}

impl Config {
    /// Check invariants that do not need filesystem access.
    pub fn validate(&self) -> Result<()> {
        match &self.operation {
            Operation::Info { paths } if paths.is_empty() => {
                Err(PdfStitchError::invalid_usage("info needs at least one path"))
            }
            Operation::Merge(request) if request.inputs.is_empty() => {
                Err(PdfStitchError::NoFilesToMerge)
            }
            Operation::Merge(request) if request.output.as_os_str().is_empty() => {
                Err(PdfStitchError::invalid_usage("merge output path is empty"))
            }
            _ => Ok(()),
        }
    }
}
