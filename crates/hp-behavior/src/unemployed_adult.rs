//! Adults without a job: free time all week, plus school runs when they
//! look after a young school child.

use hp_core::{DAY_LENGTH, DAYS_PER_WEEK, SCHOOL_DAYS, TimeUnit};
use hp_schedule::Schedule;

use crate::{
    BehaviorResult, BuildContext, Deadline, Household, Itinerary, Outing, Plan, SchoolDuty,
    ScheduleBuilder, radius_for,
};

pub const FULL_DAY_CURFEW: TimeUnit = DAY_LENGTH;
pub const SUPERVISING_CURFEW: TimeUnit = 120;
const MAX_AWAY: TimeUnit = 96;
const MAX_AWAY_SUPERVISING: TimeUnit = 94;

pub struct UnemployedAdultBuilder;

impl ScheduleBuilder for UnemployedAdultBuilder {
    fn build(&self, plan: Plan, household: &Household<'_>, ctx: &mut BuildContext<'_>) -> BehaviorResult<Schedule> {
        let duties = household.duties;
        let (curfew_time, max_away) = if duties.supervising() {
            (SUPERVISING_CURFEW, MAX_AWAY_SUPERVISING)
        } else {
            (FULL_DAY_CURFEW, MAX_AWAY)
        };
        let outing = Outing {
            weights:  ctx.config.activity.adult_unemployed,
            max_away,
            radius:   radius_for(&ctx.config.radius_limits, plan.kind(), plan.age),
        };

        let mut it = Itinerary::new(plan.schedule, household.home);
        for day in 0..DAYS_PER_WEEK {
            let day_start = day * DAY_LENGTH;
            let curfew = Deadline::new(day_start + curfew_time, household.home);
            let escorting = duties.school == SchoolDuty::Escort && day < SCHOOL_DAYS;
            let first = household.school_times.first_start().filter(|_| escorting);
            it.sleep_in(ctx, first.map_or(curfew, |e| Deadline::new(day_start + e.time, e.school)))?;
            if escorting {
                for event in household.school_times.events() {
                    let at = day_start + event.time;
                    if at <= it.now() {
                        continue;
                    }
                    it.free_time(ctx, Deadline::new(at, event.school), &outing)?;
                    it.escort(ctx, event.school, at)?;
                }
            }
            it.free_time(ctx, curfew, &outing)?;
            it.go_home(ctx)?;
            it.stay_until(day_start + DAY_LENGTH);
        }
        Ok(it.finish())
    }
}
