//! Merge orchestration.
//!
//! [`PdfMerger`] drives a merge end to end: it loads each input in turn,
//! hands it to a [`PageAccumulator`], reports progress to an [`EventSink`],
//! and saves the result with [`PdfWriter`].

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::MergeRequest;
use crate::error::{PdfStitchError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::merge::pages::PageAccumulator;
use crate::output::{EventSink, MergeEvent};
use crate::utils::percent_complete;

/// Totals for a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of input files consumed (repeats count each time).
    pub files_merged: usize,
    /// Pages in the output document.
    pub total_pages: usize,
    /// Combined size of the inputs in bytes.
    pub input_size: u64,
    /// Size of the written output in bytes.
    pub output_size: u64,
    /// Wall-clock time for the whole merge.
    pub elapsed: Duration,
}

/// Concatenates PDF files into one output file.
#[derive(Debug, Clone)]
pub struct PdfMerger {
    reader: PdfReader,
    writer: PdfWriter,
}

impl PdfMerger {
    /// Merger that accepts page-less inputs and writes atomically with
    /// pruning and compression enabled.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::new(),
        }
    }

    /// Merge `request.inputs` into `request.output`, in order.
    ///
    /// One progress event is emitted after each input is appended, and a
    /// success event after the output is on disk. Nothing is emitted for a
    /// failed merge beyond the progress already reported, and no output file
    /// is left behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the input list is empty, any input cannot be
    /// loaded, the page trees cannot be joined, the output cannot be written,
    /// or `sink` fails to deliver an event.
    pub fn merge<S: EventSink>(&self, request: &MergeRequest, mut sink: S) -> Result<MergeSummary> {
        let start = Instant::now();
        let total = request.inputs.len();
        if total == 0 {
            return Err(PdfStitchError::NoFilesToMerge);
        }

        tracing::info!(
            files = total,
            output = %request.output.display(),
            "merging PDF files"
        );

        let mut accumulator = PageAccumulator::new();
        let mut input_size = 0;

        for (index, path) in request.inputs.iter().enumerate() {
            input_size += self.append_file(&mut accumulator, path)?;
            sink.emit(&MergeEvent::progress(percent_complete(index + 1, total)))?;
        }

        let total_pages = accumulator.page_count();
        let mut merged = accumulator.into_document();
        let stats = self.writer.save(&mut merged, &request.output)?;
        drop(merged);

        tracing::info!(
            pages = total_pages,
            bytes = stats.file_size,
            pruned = stats.pruned_objects,
            elapsed_ms = stats.write_time.as_millis() as u64,
            "wrote {}",
            stats.output_path.display()
        );

        sink.emit(&MergeEvent::success(
            request.output.to_string_lossy().into_owned(),
        ))?;

        Ok(MergeSummary {
            files_merged: total,
            total_pages,
            input_size,
            output_size: stats.file_size,
            elapsed: start.elapsed(),
        })
    }

    /// Load one input and move its pages into `accumulator`. The parsed
    /// source is consumed before the next input is opened.
    fn append_file(&self, accumulator: &mut PageAccumulator, path: &Path) -> Result<u64> {
        let loaded = self.reader.load(path)?;
        let file_size = loaded.file_size;

        if loaded.page_count == 0 {
            tracing::warn!(path = %path.display(), "input has no pages");
        }

        let appended = accumulator.append(loaded.document)?;
        tracing::debug!(path = %path.display(), pages = appended, "appended");

        Ok(file_size)
    }
}

impl Default for PdfMerger {
    fn default() -> Self {
        Self::new()
    }
}
