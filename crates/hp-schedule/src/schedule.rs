//! Core schedule types: `TimeSlot`, `ScheduleKind`, and `Schedule`.
//!
//! # Slot model
//!
//! A schedule is an ordered list of slots, each naming where a person is and
//! in what role *until* its `end_time`.  The first slot implicitly starts at
//! 0, every later slot starts where its predecessor ended:
//!
//! ```text
//! slot i covers [end_time(i-1), end_time(i))     end_time(-1) = 0
//! ```
//!
//! A finished schedule has strictly increasing end times and its last slot
//! ends at `WEEK_LENGTH`, so the slots partition the week with no gaps.
//! [`Schedule::push`] keeps the ordering invariant while a builder is
//! appending; [`Schedule::validate`] checks the finished result.

use std::fmt;

use hp_core::{BuildingId, Role, TimeUnit, WEEK_LENGTH};

use crate::{ScheduleError, ScheduleResult};

// ── TimeSlot ──────────────────────────────────────────────────────────────────

/// One contiguous interval of a schedule with a fixed location and role.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub location: BuildingId,
    /// Exclusive end, absolute within the week.
    pub end_time: TimeUnit,
    pub role:     Role,
}

impl TimeSlot {
    #[inline]
    pub const fn new(location: BuildingId, end_time: TimeUnit, role: Role) -> Self {
        Self { location, end_time, role }
    }

    #[inline]
    pub fn same_place(&self, other: &TimeSlot) -> bool {
        self.location == other.location && self.role == other.role
    }
}

// ── ScheduleKind ──────────────────────────────────────────────────────────────

/// Which builder produces a person's schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScheduleKind {
    /// Under five; follows the caregiver or sits in daycare.
    YoungChild,
    /// Five to thirteen; follows the caregiver outside school hours.
    YoungSchoolChild,
    /// Fourteen to seventeen; plans its own week around school.
    OlderSchoolChild,
    EmployedAdult,
    UnemployedAdult,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 5] = [
        ScheduleKind::YoungChild,
        ScheduleKind::YoungSchoolChild,
        ScheduleKind::OlderSchoolChild,
        ScheduleKind::EmployedAdult,
        ScheduleKind::UnemployedAdult,
    ];

    /// Numeric code `0..=4` used in CSV files.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<ScheduleKind> {
        ScheduleKind::ALL.get(code as usize).copied()
    }

    pub fn is_adult(self) -> bool {
        matches!(self, ScheduleKind::EmployedAdult | ScheduleKind::UnemployedAdult)
    }

    /// Kinds whose schedule is derived from a caregiver's.
    pub fn is_dependent(self) -> bool {
        matches!(self, ScheduleKind::YoungChild | ScheduleKind::YoungSchoolChild)
    }

    pub fn label(self) -> &'static str {
        match self {
            ScheduleKind::YoungChild       => "Young Child",
            ScheduleKind::YoungSchoolChild => "Young School Child",
            ScheduleKind::OlderSchoolChild => "School Child",
            ScheduleKind::EmployedAdult    => "Employed Adult",
            ScheduleKind::UnemployedAdult  => "Unemployed Adult",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// One person's week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    kind:     ScheduleKind,
    /// Job, school, or daycare the person is enrolled at, if any.
    assigned: Option<BuildingId>,
    attends:  bool,
    slots:    Vec<TimeSlot>,
}

impl Schedule {
    pub fn new(kind: ScheduleKind) -> Self {
        Self { kind, assigned: None, attends: true, slots: Vec::new() }
    }

    /// Rebuild a finished schedule from stored slots, validating it.
    pub fn from_slots(kind: ScheduleKind, slots: Vec<TimeSlot>) -> ScheduleResult<Self> {
        let schedule = Self { kind, assigned: None, attends: true, slots };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn kind(&self) -> ScheduleKind {
        self.kind
    }

    pub fn assigned(&self) -> Option<BuildingId> {
        self.assigned
    }

    pub fn set_assigned(&mut self, building: Option<BuildingId>) {
        self.assigned = building;
    }

    /// `false` when the person has a job/school role but no place was found.
    pub fn attends_job_or_school(&self) -> bool {
        self.attends
    }

    pub fn set_attends_job_or_school(&mut self, attends: bool) {
        self.attends = attends;
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn last(&self) -> Option<&TimeSlot> {
        self.slots.last()
    }

    /// End of the last slot; 0 for an empty schedule.
    #[inline]
    pub fn end_time(&self) -> TimeUnit {
        self.slots.last().map_or(0, |s| s.end_time)
    }

    /// Start of slot `i`.
    #[inline]
    pub fn start_of(&self, i: usize) -> TimeUnit {
        if i == 0 { 0 } else { self.slots[i - 1].end_time }
    }

    /// Append a slot, clamped to the week.
    ///
    /// A slot that would not end after the current end is dropped.  A slot
    /// with the same location and role as the last one extends it instead of
    /// adding a new entry.  Returns `true` if the schedule changed.
    pub fn push(&mut self, slot: TimeSlot) -> bool {
        let end_time = slot.end_time.min(WEEK_LENGTH);
        if end_time <= self.end_time() {
            return false;
        }
        let slot = TimeSlot { end_time, ..slot };
        match self.slots.last_mut() {
            Some(last) if last.same_place(&slot) => last.end_time = end_time,
            _ => self.slots.push(slot),
        }
        true
    }

    /// Remove and return the last slot.
    pub fn pop(&mut self) -> Option<TimeSlot> {
        self.slots.pop()
    }

    /// `true` once the last slot ends at `WEEK_LENGTH`.
    pub fn is_complete(&self) -> bool {
        self.end_time() == WEEK_LENGTH
    }

    /// The slot covering time unit `t`, or `None` if `t` lies beyond the
    /// schedule's end.
    pub fn location_at(&self, t: TimeUnit) -> Option<&TimeSlot> {
        let i = self.slots.partition_point(|s| s.end_time <= t);
        self.slots.get(i)
    }

    /// Index of the first stationary slot at or after `i`.
    pub fn next_stationary(&self, i: usize) -> Option<usize> {
        (i..self.slots.len()).find(|&j| self.slots[j].role.is_stationary())
    }

    /// `(start, slot)` pairs in order.
    pub fn intervals(&self) -> impl Iterator<Item = (TimeUnit, &TimeSlot)> + '_ {
        self.slots.iter().scan(0, |start, slot| {
            let s = *start;
            *start = slot.end_time;
            Some((s, slot))
        })
    }

    /// Check that the slots partition the whole week.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.slots.is_empty() {
            return Err(ScheduleError::Empty);
        }
        let mut prev = 0;
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.end_time <= prev {
                return Err(ScheduleError::Invariant {
                    slot:   i,
                    reason: format!("end time {} does not follow {}", slot.end_time, prev),
                });
            }
            prev = slot.end_time;
        }
        if prev != WEEK_LENGTH {
            return Err(ScheduleError::Incomplete(prev));
        }
        Ok(())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: {}", self.kind)?;
        for (start, slot) in self.intervals() {
            writeln!(
                f,
                "  [{start:>4}, {:>4})  {}  {}",
                slot.end_time,
                slot.role.code(),
                slot.location.0
            )?;
        }
        Ok(())
    }
}
