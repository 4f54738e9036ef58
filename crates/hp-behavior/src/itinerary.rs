//! Running state of one independent person's week.
//!
//! An [`Itinerary`] owns the schedule being built and the counters every
//! role shares: the current absolute time, where the person is and in what
//! role, and the two rest counters.
//!
//! The schedule only ever receives the slot for a stay when the person
//! leaves, so the itinerary remembers the open stay in `here`/`role` and
//! [`finish`][Itinerary::finish] closes it at the end of the week.  `now`
//! never moves backwards and is capped at `WEEK_LENGTH`, which together with
//! [`Schedule::push`] keeps end times strictly increasing.
//!
//! # Rest rule
//!
//! Time spent anywhere adds to `away` until `at_home` reaches
//! [`REST_THRESHOLD`]; at that point `away` resets to zero.  Leaving home
//! resets `at_home`.

use hp_core::{BuildingId, Role, TimeUnit, WEEK_LENGTH, WeekTime};
use hp_mobility::move_to;
use hp_schedule::{Schedule, TimeSlot};

use crate::{BehaviorResult, BuildContext};

/// Continuous time at home that counts as a night's rest.
pub const REST_THRESHOLD: TimeUnit = 48;

/// A time by which the person has to be at `place`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Deadline {
    pub at:    TimeUnit,
    pub place: BuildingId,
}

impl Deadline {
    pub fn new(at: TimeUnit, place: BuildingId) -> Self {
        Self { at, place }
    }
}

#[derive(Debug)]
pub struct Itinerary {
    schedule: Schedule,
    home:     BuildingId,
    here:     BuildingId,
    role:     Role,
    now:      TimeUnit,
    at_home:  TimeUnit,
    away:     TimeUnit,
}

impl Itinerary {
    /// Start the week at home at time 0.
    pub fn new(schedule: Schedule, home: BuildingId) -> Self {
        Self { schedule, home, here: home, role: Role::Home, now: 0, at_home: 0, away: 0 }
    }

    #[inline]
    pub fn now(&self) -> TimeUnit {
        self.now
    }

    #[inline]
    pub fn here(&self) -> BuildingId {
        self.here
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn home(&self) -> BuildingId {
        self.home
    }

    pub fn at_home(&self) -> TimeUnit {
        self.at_home
    }

    pub fn away(&self) -> TimeUnit {
        self.away
    }

    pub fn is_home(&self) -> bool {
        self.here == self.home && self.role == Role::Home
    }

    pub fn week_over(&self) -> bool {
        self.now >= WEEK_LENGTH
    }

    /// Day index of `now`; 6 once the week is over.
    pub fn day(&self) -> u32 {
        WeekTime(self.now.min(WEEK_LENGTH - 1)).day()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Leave for `to`, arriving in `role`.  Returns the travel time.
    ///
    /// `time_limit` bounds the trip for the transport mode choice.  Going to
    /// the place and role the person already occupies is a no-op.
    pub fn travel(
        &mut self,
        ctx:        &mut BuildContext<'_>,
        to:         BuildingId,
        role:       Role,
        time_limit: Option<TimeUnit>,
    ) -> BehaviorResult<TimeUnit> {
        if to == self.here && role == self.role {
            return Ok(0);
        }
        let distance = ctx.distance(self.here, to)?;
        let choice = ctx.transport.choose(Some(distance), time_limit, ctx.rng);
        let travel = move_to(&mut self.schedule, ctx.index, self.here, to, self.role, self.now, &choice)?;
        let travel = travel.min(WEEK_LENGTH - self.now);

        self.now += travel;
        self.away += travel;
        if !(to == self.home && role == Role::Home) {
            self.at_home = 0;
        }
        self.here = to;
        self.role = role;
        Ok(travel)
    }

    pub fn go_home(&mut self, ctx: &mut BuildContext<'_>) -> BehaviorResult<TimeUnit> {
        self.travel(ctx, self.home, Role::Home, None)
    }

    /// Remain where the person is for `units`.
    pub fn stay(&mut self, units: TimeUnit) {
        let units = units.min(WEEK_LENGTH - self.now);
        self.now += units;
        if self.is_home() {
            self.at_home += units;
            if self.at_home >= REST_THRESHOLD {
                self.away = 0;
            } else {
                self.away += units;
            }
        } else {
            self.at_home = 0;
            self.away += units;
        }
    }

    pub fn stay_until(&mut self, t: TimeUnit) {
        if t > self.now {
            self.stay(t - self.now);
        }
    }

    /// Close the open stay at the end of the week and hand back the schedule.
    pub fn finish(self) -> Schedule {
        let mut schedule = self.schedule;
        schedule.push(TimeSlot::new(self.here, WEEK_LENGTH, self.role));
        if schedule.is_empty() {
            schedule.push(TimeSlot::new(self.home, WEEK_LENGTH, Role::Home));
        }
        schedule
    }
}
