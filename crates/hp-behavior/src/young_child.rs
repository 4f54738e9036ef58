//! Children under five: follow the caregiver, or wait in daycare while the
//! caregiver works.

use hp_core::{Role, WEEK_LENGTH};
use hp_schedule::{Schedule, ScheduleKind, TimeSlot};

use crate::{BehaviorError, BehaviorResult, BuildContext, Household, Plan, ScheduleBuilder};

/// Mirrors the caregiver slot by slot.
///
/// A caregiver visit to the family daycare whose next stationary slot is at
/// work drops the child off.  The child then stays put, with nothing emitted,
/// until the caregiver next visits the daycare; that visit emits one
/// `DaycareChild` slot for the whole stay and mirroring resumes.  An
/// unemployed caregiver never drops the child off.
pub struct YoungChildBuilder;

impl ScheduleBuilder for YoungChildBuilder {
    fn build(&self, plan: Plan, household: &Household<'_>, _ctx: &mut BuildContext<'_>) -> BehaviorResult<Schedule> {
        let caregiver = household.caregiver.ok_or(BehaviorError::MissingCaregiver(plan.kind()))?;
        let daycare = household.daycare.filter(|_| caregiver.kind() == ScheduleKind::EmployedAdult);

        let mut schedule = plan.schedule;
        let slots = caregiver.slots();
        let mut at_daycare = false;

        for (i, slot) in slots.iter().enumerate() {
            let at_drop_point = daycare.is_some_and(|d| slot.location == d && slot.role == Role::Visitor);
            if !at_drop_point {
                if !at_daycare {
                    schedule.push(*slot);
                }
                continue;
            }
            let off_to_work = caregiver.next_stationary(i + 1).is_some_and(|j| slots[j].role == Role::Employee);
            match (at_daycare, off_to_work) {
                (false, true) => at_daycare = true,
                (false, false) => {
                    schedule.push(*slot);
                }
                // Picked up and straight back to work: the child stays.
                (true, true) => {}
                (true, false) => {
                    schedule.push(TimeSlot::new(slot.location, caregiver.start_of(i), Role::DaycareChild));
                    schedule.push(*slot);
                    at_daycare = false;
                }
            }
        }

        if let Some(d) = daycare.filter(|_| at_daycare) {
            schedule.push(TimeSlot::new(d, WEEK_LENGTH, Role::DaycareChild));
        }
        if schedule.is_empty() {
            schedule.push(TimeSlot::new(household.home, WEEK_LENGTH, Role::Home));
        }
        Ok(schedule)
    }
}
