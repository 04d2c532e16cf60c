//! Error types for pdfstitch.
//!
//! Errors fall into three groups, and the group decides the process exit
//! code:
//!
//! - **Usage errors**: malformed command-line arguments or an empty merge list
//! - **Input errors**: missing, unreadable or malformed input PDFs
//! - **Output errors**: the merged document could not be written

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfstitch operations.
pub type Result<T> = std::result::Result<T, PdfStitchError>;

/// Main error type for pdfstitch operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfStitchError {
    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file exists but cannot be read (permission denied, etc.).
    #[error("Cannot access file: {}: {source}", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The PDF parser rejected the file.
    #[error("Failed to load PDF: {}: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the parser.
        reason: String,
    },

    /// The file parsed but its structure is unusable.
    #[error("Corrupted or invalid PDF: {}: {details}", path.display())]
    CorruptedPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// What is wrong with it.
        details: String,
    },

    /// The file is encrypted and cannot be opened without a password.
    #[error("PDF is encrypted and cannot be processed: {}", path.display())]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// The PDFium library could not be bound.
    #[error("PDF renderer unavailable: {reason}")]
    RendererUnavailable {
        /// Binding failure reported by pdfium-render.
        reason: String,
    },

    /// Rasterizing a page failed.
    #[error("Failed to render preview for {}: {reason}", path.display())]
    RenderFailed {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the renderer.
        reason: String,
    },

    /// Encoding the rendered page as PNG failed.
    #[error("Failed to encode preview image: {reason}")]
    PreviewEncodingFailed {
        /// Reason reported by the encoder.
        reason: String,
    },

    /// No files were provided for merging.
    #[error("No input files specified for merging")]
    NoFilesToMerge,

    /// The merge input list argument could not be decoded.
    #[error("Invalid input list: {details}")]
    InvalidInputList {
        /// Details about what is invalid.
        details: String,
    },

    /// Arguments were syntactically valid but make no sense together.
    #[error("Invalid usage: {message}")]
    InvalidUsage {
        /// Description of the problem.
        message: String,
    },

    /// The page tree of the accumulated document could not be updated.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// The output file (or its temporary sibling) could not be created.
    #[error("Failed to create output file: {}: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serializing or flushing the output failed.
    #[error("Failed to write to output file: {}: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A JSON event line could not be written to the event stream.
    #[error("Failed to emit event: {source}")]
    EventOutput {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl PdfStitchError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a RenderFailed error.
    pub fn render_failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInputList error.
    pub fn invalid_input_list(details: impl Into<String>) -> Self {
        Self::InvalidInputList {
            details: details.into(),
        }
    }

    /// Create an InvalidUsage error.
    pub fn invalid_usage(message: impl Into<String>) -> Self {
        Self::InvalidUsage {
            message: message.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from bad command-line input rather than from
    /// the files themselves.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::NoFilesToMerge | Self::InvalidInputList { .. } | Self::InvalidUsage { .. }
        )
    }

    /// Get the process exit code for this error.
    ///
    /// Usage errors share clap's exit code 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoFilesToMerge => 2,
            Self::InvalidInputList { .. } => 2,
            Self::InvalidUsage { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::NotAFile { .. } => 3,
            Self::FileNotAccessible { .. } => 3,
            Self::FailedToLoadPdf { .. } => 4,
            Self::CorruptedPdf { .. } => 4,
            Self::EncryptedPdf { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::EventOutput { .. } => 5,
            Self::Io { .. } => 5,
            Self::RendererUnavailable { .. } => 1,
            Self::RenderFailed { .. } => 1,
            Self::PreviewEncodingFailed { .. } => 1,
            Self::MergeFailed { .. } => 1,
        }
    }
}
