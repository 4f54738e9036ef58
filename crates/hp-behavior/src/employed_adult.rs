//! Adults with a job.
//!
//! A weekly job budget is drawn once, then a daily quota is drawn from what
//! is left each day:
//!
//! ```text
//! weekly = 60 + rand(300)
//! daily  = 1 + rand(min(weekly_left, 84))      (0 once the budget is spent)
//! ```
//!
//! Each day runs up to three kinds of deadline: the school bells of a child
//! this adult escorts, and the curfew.  Between deadlines the adult works,
//! stays home, or goes out.  Work is forced, skipping the draw, when the
//! quota left exceeds half the time left before the next deadline, or when
//! quota is left and the children are at school.
//!
//! A young child is dropped at daycare on the way to work and collected
//! before any return home.

use log::trace;

use hp_core::{ActivityWeights, BuildingId, DAY_LENGTH, DAYS_PER_WEEK, Role, SCHOOL_DAYS, TimeUnit};
use hp_schedule::Schedule;

use crate::{
    Activity, BehaviorResult, Bell, BuildContext, Deadline, Household, Itinerary, Outcome, Outing, Plan,
    REST_THRESHOLD, SchoolDuty, ScheduleBuilder, radius_for,
    unemployed_adult::{FULL_DAY_CURFEW, SUPERVISING_CURFEW},
};

const MIN_WEEKLY_JOB: TimeUnit = 60;
const WEEKLY_JOB_SPREAD: u32 = 300;
const DAILY_JOB_CAP: TimeUnit = 84;
const MAX_AWAY: TimeUnit = 96;
const MAX_AWAY_SUPERVISING: TimeUnit = 90;
/// Time past midnight a supervising adult stays home before the next day.
const NIGHT_OVERRUN: TimeUnit = 30;
/// Day from which an adult who never made it to work stalls until school.
const STALL_FROM_DAY: u32 = 2;

pub struct EmployedAdultBuilder;

/// Work and childcare state carried across the week.
struct Shift {
    job:        Option<BuildingId>,
    daycare:    Option<BuildingId>,
    dropped:    bool,
    weekly:     TimeUnit,
    daily:      TimeUnit,
    worked_any: bool,
    work:       ActivityWeights,
    no_work:    ActivityWeights,
    outing:     Outing,
}

impl ScheduleBuilder for EmployedAdultBuilder {
    fn build(&self, plan: Plan, household: &Household<'_>, ctx: &mut BuildContext<'_>) -> BehaviorResult<Schedule> {
        let duties = household.duties;
        let escort = duties.school == SchoolDuty::Escort;
        let (curfew_time, max_away) = if duties.supervising() {
            (SUPERVISING_CURFEW, MAX_AWAY_SUPERVISING)
        } else {
            (FULL_DAY_CURFEW, MAX_AWAY)
        };
        let job = plan.attended();
        let activity = &ctx.config.activity;
        let mut shift = Shift {
            job,
            daycare:    household.daycare.filter(|_| duties.young_child),
            dropped:    false,
            weekly:     if job.is_some() { MIN_WEEKLY_JOB + ctx.rng.below(WEEKLY_JOB_SPREAD) } else { 0 },
            daily:      0,
            worked_any: false,
            work:       activity.adult_work,
            no_work:    activity.adult_no_work,
            outing:     Outing {
                weights: activity.adult_no_work,
                max_away,
                radius:  radius_for(&ctx.config.radius_limits, plan.kind(), plan.age),
            },
        };
        let home = household.home;

        let mut it = Itinerary::new(plan.schedule, home);
        for day in 0..DAYS_PER_WEEK {
            let day_start = day * DAY_LENGTH;
            let next_day = day_start + DAY_LENGTH;
            shift.daily = if shift.weekly > 0 { 1 + ctx.rng.below(shift.weekly.min(DAILY_JOB_CAP)) } else { 0 };
            trace!("day {day}: job quota {} of {} left this week", shift.daily, shift.weekly);

            let curfew = Deadline::new(day_start + curfew_time, home);
            let escorting = escort && day < SCHOOL_DAYS;
            let first = household.school_times.first_start().filter(|_| escorting);
            it.sleep_in(ctx, first.map_or(curfew, |e| Deadline::new(day_start + e.time, e.school)))?;

            let mut at_school = false;
            if escorting {
                for event in household.school_times.events() {
                    let at = day_start + event.time;
                    if at > it.now() {
                        shift.until(&mut it, ctx, Deadline::new(at, event.school), at_school)?;
                        it.escort(ctx, event.school, at)?;
                    }
                    at_school = event.bell == Bell::Start;
                }
            }
            shift.until(&mut it, ctx, curfew, at_school)?;

            shift.collect_child(&mut it, ctx)?;
            it.go_home(ctx)?;

            // First school run of tomorrow, if any.
            let next_bell = match household.school_times.first_start() {
                Some(first) if escort && day + 1 < SCHOOL_DAYS => {
                    let lead = ctx.distance(home, first.school)? + 1;
                    Some((next_day + first.time).saturating_sub(lead))
                }
                _ => None,
            };
            let night = Night {
                now:         it.now(),
                at_home:     it.at_home(),
                next_day,
                supervising: duties.supervising(),
                next_bell,
                stalled:     shift.job.is_some() && !shift.worked_any && day >= STALL_FROM_DAY,
            };
            it.stay_until(night.end());
        }
        Ok(it.finish())
    }
}

/// The adult's night at home after the day's last return.
pub(crate) struct Night {
    pub now:         TimeUnit,
    pub at_home:     TimeUnit,
    pub next_day:    TimeUnit,
    pub supervising: bool,
    /// Departure for tomorrow's first school run.
    pub next_bell:   Option<TimeUnit>,
    /// Has a job but has not worked yet, from `STALL_FROM_DAY` on.
    pub stalled:     bool,
}

impl Night {
    /// When the adult may leave home again.
    ///
    /// A supervising adult stays past midnight until `NIGHT_OVERRUN` or
    /// until rested, whichever is later.  Tomorrow's school run cuts the
    /// night short; a stalled adult waits for it.
    pub fn end(&self) -> TimeUnit {
        let mut until = if self.supervising {
            (self.next_day + NIGHT_OVERRUN).max(self.now + REST_THRESHOLD.saturating_sub(self.at_home))
        } else {
            self.next_day
        };
        if let Some(bell) = self.next_bell {
            if self.stalled {
                until = bell;
            }
            until = until.min(bell);
        }
        until
    }
}

impl Shift {
    /// Work, stay home, or go out until `deadline` is due.
    fn until(
        &mut self,
        it:        &mut Itinerary,
        ctx:       &mut BuildContext<'_>,
        deadline:  Deadline,
        at_school: bool,
    ) -> BehaviorResult<()> {
        while !it.due(ctx, deadline)? {
            if it.must_rest(ctx, self.outing.max_away)? {
                self.collect_child(it, ctx)?;
                it.rest(ctx, deadline)?;
                continue;
            }

            let left = deadline.at.saturating_sub(it.now() + ctx.distance(it.here(), deadline.place)?);
            let forced = self.daily > 0 && ((self.daily > left / 2 && left > 2) || at_school);
            let activity = if forced {
                Activity::Job
            } else {
                let weights = if self.daily > 0 { self.work } else { self.no_work };
                Activity::draw(&weights, ctx.rng)
            };

            match activity {
                Activity::Job if self.daily > 0 => self.work(it, ctx, deadline)?,
                Activity::Out => {
                    if let Outcome::HomeInstead { cap } = it.go_out(ctx, deadline, &self.outing)? {
                        self.collect_child(it, ctx)?;
                        it.spend_at_home(ctx, deadline, cap)?;
                    }
                }
                Activity::Job | Activity::Home => {
                    self.collect_child(it, ctx)?;
                    it.spend_at_home(ctx, deadline, None)?;
                }
            }
        }
        Ok(())
    }

    /// One block of work, dropping the young child off first.
    fn work(&mut self, it: &mut Itinerary, ctx: &mut BuildContext<'_>, deadline: Deadline) -> BehaviorResult<()> {
        let Some(job) = self.job else {
            it.stay(1);
            return Ok(());
        };
        let detour = match self.daycare.filter(|_| !self.dropped) {
            Some(daycare) => ctx.distance(it.here(), daycare)? + ctx.distance(daycare, job)? + 1,
            None => ctx.distance(it.here(), job)?,
        };
        let room = deadline.at.saturating_sub(it.now() + detour + ctx.distance(job, deadline.place)? + 1);
        if room == 0 {
            it.stay(1);
            return Ok(());
        }

        if let Some(daycare) = self.daycare.filter(|_| !self.dropped) {
            it.travel(ctx, daycare, Role::Visitor, None)?;
            it.stay(1);
            self.dropped = true;
        }
        it.travel(ctx, job, Role::Employee, None)?;
        // Leave work in time to be home before the away budget runs out.
        let before_rest = self.outing.max_away.saturating_sub(it.away() + ctx.distance(job, it.home())?);
        let hours = self.daily.min(room).min(before_rest).max(1);
        it.stay(hours);
        self.daily -= hours;
        self.weekly = self.weekly.saturating_sub(hours);
        self.worked_any = true;
        Ok(())
    }

    /// Pick the young child up from daycare if it was dropped off.
    fn collect_child(&mut self, it: &mut Itinerary, ctx: &mut BuildContext<'_>) -> BehaviorResult<()> {
        if let Some(daycare) = self.daycare.filter(|_| self.dropped) {
            it.travel(ctx, daycare, Role::Visitor, None)?;
            it.stay(1);
            self.dropped = false;
        }
        Ok(())
    }
}
