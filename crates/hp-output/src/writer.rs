//! The `ScheduleWriter` trait implemented by all backend writers.

use hp_sim::{Family, Population};

use crate::OutputResult;

/// Trait implemented by schedule output backends.
pub trait ScheduleWriter {
    /// Write every member of `family`: one person row and all their slots.
    fn write_family(&mut self, family: &Family) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a whole generated population and finish the writer.
pub fn write_population<W: ScheduleWriter>(writer: &mut W, population: &Population) -> OutputResult<()> {
    for family in population.families() {
        writer.write_family(family)?;
    }
    writer.finish()
}
