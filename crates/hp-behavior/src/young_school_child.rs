//! Children five to thirteen: at school during school hours, with the
//! caregiver otherwise.

use hp_core::{Role, WEEK_LENGTH};
use hp_schedule::{Schedule, TimeSlot};

use crate::{BehaviorError, BehaviorResult, BuildContext, Household, Plan, ScheduleBuilder, Timetable};

pub struct YoungSchoolChildBuilder;

impl ScheduleBuilder for YoungSchoolChildBuilder {
    fn build(&self, plan: Plan, household: &Household<'_>, ctx: &mut BuildContext<'_>) -> BehaviorResult<Schedule> {
        let caregiver = household.caregiver.ok_or(BehaviorError::MissingCaregiver(plan.kind()))?;
        let timetable = plan.attended().map(|school| Timetable::of(ctx.index, school)).transpose()?;
        let windows: Vec<_> = timetable.iter().flat_map(|t| t.windows()).collect();

        let mut schedule = plan.schedule;
        let mut t = 0;
        let mut w = 0;
        for slot in caregiver.slots() {
            while t < slot.end_time {
                while windows.get(w).is_some_and(|&(_, end)| end <= t) {
                    w += 1;
                }
                match (windows.get(w), timetable) {
                    (Some(&(start, end)), Some(tt)) if start <= t => {
                        // Walking in with the caregiver is part of the school stay.
                        if schedule.last().is_some_and(|l| l.location == tt.school && l.role != Role::Student) {
                            schedule.pop();
                        }
                        schedule.push(TimeSlot::new(tt.school, end, Role::Student));
                        t = end;
                    }
                    (next, _) => {
                        let until = next.map_or(slot.end_time, |&(start, _)| start.min(slot.end_time));
                        schedule.push(TimeSlot { end_time: until, ..*slot });
                        t = until;
                    }
                }
            }
        }

        if schedule.is_empty() {
            schedule.push(TimeSlot::new(household.home, WEEK_LENGTH, Role::Home));
        }
        Ok(schedule)
    }
}
