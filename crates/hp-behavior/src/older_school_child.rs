//! Children fourteen to seventeen: school on weekdays, free time around it.

use hp_core::{DAY_LENGTH, DAYS_PER_WEEK, Role, TimeUnit};
use hp_schedule::Schedule;

use crate::{
    BehaviorResult, BuildContext, Deadline, Household, Itinerary, Outing, Plan, REST_THRESHOLD,
    ScheduleBuilder, Timetable, radius_for,
};

/// Latest time of day to be back home.
pub const OLDER_CHILD_CURFEW: TimeUnit = 132;
pub const OLDER_CHILD_MAX_AWAY: TimeUnit = 96;

/// Each school day: top up sleep, spend any slack before school, attend
/// school, then free time until curfew.  Weekends are free time only.
pub struct OlderSchoolChildBuilder;

impl ScheduleBuilder for OlderSchoolChildBuilder {
    fn build(&self, plan: Plan, household: &Household<'_>, ctx: &mut BuildContext<'_>) -> BehaviorResult<Schedule> {
        let timetable = plan.attended().map(|school| Timetable::of(ctx.index, school)).transpose()?;
        let radius = radius_for(&ctx.config.radius_limits, plan.kind(), plan.age);
        let weekday = ctx.config.activity.older_school_day;
        let weekend = ctx.config.activity.older_school_weekend;
        let home = household.home;

        let mut it = Itinerary::new(plan.schedule, home);
        for day in 0..DAYS_PER_WEEK {
            let day_start = day * DAY_LENGTH;
            let curfew = Deadline::new(day_start + curfew_on(day, timetable), home);
            let window = timetable.and_then(|t| t.window(day).map(|w| (t.school, w)));
            let outing = Outing {
                weights:  if window.is_some() { weekday } else { weekend },
                max_away: OLDER_CHILD_MAX_AWAY,
                radius,
            };

            if let Some((school, (start, end))) = window {
                let bell = Deadline::new(start, school);
                it.sleep_in(ctx, bell)?;
                it.free_time(ctx, bell, &outing)?;
                it.travel(ctx, school, Role::Student, Some(start.saturating_sub(it.now())))?;
                it.stay_until(end);
            }

            it.sleep_in(ctx, curfew)?;
            it.free_time(ctx, curfew, &outing)?;
            it.go_home(ctx)?;
            it.stay_until(day_start + DAY_LENGTH);
        }
        Ok(it.finish())
    }
}

/// Curfew for `day`.  On the last day it is pulled forward when staying out
/// until the regular curfew would leave too little sleep before Monday's
/// school start.
pub(crate) fn curfew_on(day: u32, timetable: Option<Timetable>) -> TimeUnit {
    if day + 1 < DAYS_PER_WEEK {
        return OLDER_CHILD_CURFEW;
    }
    let monday_start = timetable.map_or(0, |t| t.start);
    let sleep = DAY_LENGTH - OLDER_CHILD_CURFEW + monday_start;
    if sleep < REST_THRESHOLD {
        OLDER_CHILD_CURFEW - (REST_THRESHOLD - sleep)
    } else {
        OLDER_CHILD_CURFEW
    }
}
