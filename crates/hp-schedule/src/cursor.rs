//! Sequential playback of a finished schedule.

use hp_core::{TimeUnit, WEEK_LENGTH};

use crate::{Schedule, TimeSlot};

/// Steps through a schedule one time unit at a time, wrapping from the last
/// unit of the week back to 0.
///
/// Downstream contact models advance thousands of cursors in lock-step;
/// `advance` is O(1) amortised where [`Schedule::location_at`] is a binary
/// search.
pub struct ScheduleCursor<'a> {
    schedule: &'a Schedule,
    time:     TimeUnit,
    slot:     usize,
}

impl<'a> ScheduleCursor<'a> {
    /// A cursor positioned at time 0.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the schedule is empty.
    pub fn new(schedule: &'a Schedule) -> Self {
        debug_assert!(!schedule.is_empty(), "cursor over an empty schedule");
        Self { schedule, time: 0, slot: 0 }
    }

    pub fn time(&self) -> TimeUnit {
        self.time
    }

    /// Jump to time unit `t` (taken modulo the week).
    pub fn seek(&mut self, t: TimeUnit) {
        self.time = t % WEEK_LENGTH;
        let slots = self.schedule.slots();
        self.slot = slots
            .partition_point(|s| s.end_time <= self.time)
            .min(slots.len().saturating_sub(1));
    }

    /// The slot covering the current time.
    pub fn current(&self) -> Option<&'a TimeSlot> {
        self.schedule.slots().get(self.slot)
    }

    /// Move to the next time unit and return the slot covering it.
    pub fn advance(&mut self) -> Option<&'a TimeSlot> {
        self.time += 1;
        if self.time >= WEEK_LENGTH {
            self.time = 0;
            self.slot = 0;
        } else {
            let slots = self.schedule.slots();
            while self.slot + 1 < slots.len() && slots[self.slot].end_time <= self.time {
                self.slot += 1;
            }
        }
        self.current()
    }
}
