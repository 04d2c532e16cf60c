//! JSON-lines writer.
//!
//! Each value is serialized on a single line and the underlying writer is
//! flushed right away, so a parent process reading the pipe sees every line
//! as soon as it is produced.

use serde::Serialize;
use std::io::Write;

use crate::error::{PdfStitchError, Result};
use crate::output::{EventSink, MergeEvent};

/// Writes one JSON document per line to `W`.
pub struct JsonLines<W: Write> {
    writer: W,
}

impl<W: Write> JsonLines<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize `value`, terminate the line and flush.
    ///
    /// # Errors
    ///
    /// Returns [`PdfStitchError::EventOutput`] if the line cannot be written
    /// (for example, the reading end of a pipe has gone away).
    pub fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let to_event_error = |source: std::io::Error| PdfStitchError::EventOutput { source };

        serde_json::to_writer(&mut self.writer, value)
            .map_err(|err| to_event_error(std::io::Error::from(err)))?;
        self.writer.write_all(b"\n").map_err(to_event_error)?;
        self.writer.flush().map_err(to_event_error)
    }

    /// Consume the wrapper and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonLines<W> {
    fn emit(&mut self, event: &MergeEvent) -> Result<()> {
        self.write_line(event)
    }
}
