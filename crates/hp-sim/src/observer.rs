//! Generation observer trait for progress reporting and streaming output.

use crate::{Family, Population};

/// Callbacks invoked by [`ScheduleGenerator::run`][crate::ScheduleGenerator::run]
/// as families are completed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl GenerationObserver for Progress {
///     fn on_progress(&mut self, done: usize, total: usize) {
///         println!("{done}/{total} families");
///     }
/// }
/// ```
pub trait GenerationObserver {
    /// Called once every member of `family` has a finished, validated
    /// schedule.  Families arrive in population order.
    fn on_family_done(&mut self, _family: &Family) {}

    /// Called every `config.progress_interval` families.
    fn on_progress(&mut self, _done: usize, _total: usize) {}

    /// Called once after the last family.
    fn on_finish(&mut self, _population: &Population) {}
}

/// A [`GenerationObserver`] that does nothing.
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
