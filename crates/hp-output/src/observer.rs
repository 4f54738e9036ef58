//! `ScheduleWriterObserver<W>` — bridges `GenerationObserver` to a `ScheduleWriter`.

use hp_sim::{Family, GenerationObserver, Population};

use crate::writer::ScheduleWriter;
use crate::{OutputError, OutputResult};

/// A [`GenerationObserver`] that streams each finished family to any
/// [`ScheduleWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `generator.run()` returns, check for errors
/// with [`take_error`][Self::take_error].  Once a write has failed, later
/// families are skipped.
pub struct ScheduleWriterObserver<W: ScheduleWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ScheduleWriter> ScheduleWriterObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `generator.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ScheduleWriter> GenerationObserver for ScheduleWriterObserver<W> {
    fn on_family_done(&mut self, family: &Family) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_family(family);
        self.store_err(result);
    }

    fn on_finish(&mut self, _population: &Population) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
