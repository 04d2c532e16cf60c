//! Machine-readable output.
//!
//! pdfstitch talks to its caller through stdout, one JSON object per line.
//! Merging reports through an [`EventSink`] so the same engine can drive a
//! JSON-lines pipe, an in-process collector, or anything else a host
//! application wants to plug in.

pub mod events;
pub mod json_lines;

pub use events::MergeEvent;
pub use json_lines::JsonLines;

use crate::error::Result;

/// Receives merge events as they happen.
pub trait EventSink {
    /// Deliver one event. Errors abort the merge.
    fn emit(&mut self, event: &MergeEvent) -> Result<()>;
}

/// Collects events in memory.
impl EventSink for Vec<MergeEvent> {
    fn emit(&mut self, event: &MergeEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &MergeEvent) -> Result<()> {
        (**self).emit(event)
    }
}
