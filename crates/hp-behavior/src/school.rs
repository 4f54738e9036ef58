//! School timetables and the family's merged bell list.

use hp_core::{BuildingId, DAY_LENGTH, SCHOOL_DAYS, TimeUnit};
use hp_spatial::SpatialIndex;

use crate::{BehaviorError, BehaviorResult};

/// When one school opens and closes, as time of day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timetable {
    pub school: BuildingId,
    pub start:  TimeUnit,
    pub end:    TimeUnit,
}

impl Timetable {
    pub fn of(index: &SpatialIndex, school: BuildingId) -> BehaviorResult<Timetable> {
        let s = index.building(school)?.as_school().ok_or(BehaviorError::NotASchool(school))?;
        Ok(Timetable { school, start: s.start_time, end: s.end_time })
    }

    /// Absolute `[start, end)` on `day`, or `None` on weekends.
    pub fn window(&self, day: u32) -> Option<(TimeUnit, TimeUnit)> {
        (day < SCHOOL_DAYS).then(|| {
            let base = day * DAY_LENGTH;
            (base + self.start, base + self.end)
        })
    }

    /// Every school-day window of the week, in order.
    pub fn windows(&self) -> impl Iterator<Item = (TimeUnit, TimeUnit)> + '_ {
        (0..SCHOOL_DAYS).filter_map(|d| self.window(d))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bell {
    Start,
    End,
}

/// A school opening or closing that the caregiver has to be at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchoolEvent {
    /// Time of day.
    pub time:   TimeUnit,
    pub bell:   Bell,
    pub school: BuildingId,
}

/// Deduplicated, time-ordered bells of every school a family's children
/// attend.  Two children at the same school share one drop-off and one
/// pick-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolTimes {
    events: Vec<SchoolEvent>,
}

impl SchoolTimes {
    pub fn new<I: IntoIterator<Item = Timetable>>(timetables: I) -> Self {
        let mut events: Vec<SchoolEvent> = timetables
            .into_iter()
            .flat_map(|t| {
                [
                    SchoolEvent { time: t.start, bell: Bell::Start, school: t.school },
                    SchoolEvent { time: t.end,   bell: Bell::End,   school: t.school },
                ]
            })
            .collect();
        events.sort_unstable();
        events.dedup();
        Self { events }
    }

    pub fn events(&self) -> &[SchoolEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The earliest opening bell of the day.
    pub fn first_start(&self) -> Option<&SchoolEvent> {
        self.events.iter().find(|e| e.bell == Bell::Start)
    }
}
