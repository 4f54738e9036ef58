//! Free-choice activities: staying home, going out, resting.
//!
//! Every helper here keeps the person able to reach a [`Deadline`] in time,
//! using the Chebyshev distance as the travel estimate.  Each one advances
//! the clock by at least one unit, so loops built from them terminate.

use hp_core::{ActivityWeights, BuildingId, Role, SimRng, TimeUnit};
use hp_spatial::{Admission, SearchRequest};

use crate::{BehaviorResult, BuildContext, Deadline, Itinerary, REST_THRESHOLD};

/// Result of the weighted free-choice draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activity {
    Home,
    Job,
    Out,
}

impl Activity {
    /// Draw in `[home, job, out]` order; an all-zero weight set yields `Home`.
    pub fn draw(weights: &ActivityWeights, rng: &mut SimRng) -> Activity {
        match rng.weighted(&weights.as_array()) {
            Some(1) => Activity::Job,
            Some(2) => Activity::Out,
            _ => Activity::Home,
        }
    }
}

/// What an attempted outing turned into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Visited,
    /// Nowhere to go: spend up to `cap` units at home instead.
    HomeInstead { cap: Option<TimeUnit> },
}

/// Limits of a free-choice stretch.
#[derive(Copy, Clone, Debug)]
pub struct Outing {
    pub weights:  ActivityWeights,
    /// Away budget before a forced return home.
    pub max_away: TimeUnit,
    /// Search radius for places to visit.
    pub radius:   Option<u32>,
}

impl Itinerary {
    /// Units that can be spent at `at` and still make `deadline`.
    fn room_at(&self, ctx: &BuildContext<'_>, at: BuildingId, deadline: Deadline) -> BehaviorResult<TimeUnit> {
        let trip = ctx.distance(self.here(), at)? + ctx.distance(at, deadline.place)?;
        Ok(deadline.at.saturating_sub(self.now() + trip + 1))
    }

    /// `true` when leaving now is the last chance to make `deadline`.
    pub fn due(&self, ctx: &BuildContext<'_>, deadline: Deadline) -> BehaviorResult<bool> {
        let trip = ctx.distance(self.here(), deadline.place)?;
        Ok(self.week_over() || self.now() + trip + 1 >= deadline.at)
    }

    /// `true` when the away budget forces a return home.
    pub fn must_rest(&self, ctx: &BuildContext<'_>, max_away: TimeUnit) -> BehaviorResult<bool> {
        let back = ctx.distance(self.here(), self.home())?;
        Ok(self.away() + back + 1 >= max_away)
    }

    /// Go home and stay until rested, or as long as `deadline` allows.
    pub fn rest(&mut self, ctx: &mut BuildContext<'_>, deadline: Deadline) -> BehaviorResult<()> {
        let room = self.room_at(ctx, self.home(), deadline)?;
        self.go_home(ctx)?;
        let need = REST_THRESHOLD.saturating_sub(self.at_home()).max(1);
        self.stay(need.min(room.max(1)));
        Ok(())
    }

    /// At home, make up the rest still missing as far as `deadline` allows.
    pub fn sleep_in(&mut self, ctx: &BuildContext<'_>, deadline: Deadline) -> BehaviorResult<()> {
        if self.is_home() {
            let room = self.room_at(ctx, self.home(), deadline)?;
            self.stay(REST_THRESHOLD.saturating_sub(self.at_home()).min(room));
        }
        Ok(())
    }

    /// Go home for a random stretch of at most `cap` units.
    ///
    /// When a detour home would miss the deadline the person waits one unit
    /// where they are.
    pub fn spend_at_home(
        &mut self,
        ctx:      &mut BuildContext<'_>,
        deadline: Deadline,
        cap:      Option<TimeUnit>,
    ) -> BehaviorResult<()> {
        let room = self.room_at(ctx, self.home(), deadline)?;
        if room == 0 {
            self.stay(1);
            return Ok(());
        }
        self.go_home(ctx)?;
        let limit = cap.map_or(room, |c| c.min(room)).max(1);
        let units = 1 + ctx.rng.below(limit);
        self.stay(units);
        Ok(())
    }

    /// Go out for a random stretch bounded by the away budget and the
    /// deadline; stay home instead if nowhere admits a visitor.
    pub fn spend_out(&mut self, ctx: &mut BuildContext<'_>, deadline: Deadline, outing: &Outing) -> BehaviorResult<()> {
        if let Outcome::HomeInstead { cap } = self.go_out(ctx, deadline, outing)? {
            self.spend_at_home(ctx, deadline, cap)?;
        }
        Ok(())
    }

    /// The visiting half of [`spend_out`][Self::spend_out].  On
    /// `HomeInstead` nothing has moved yet; the caller decides how to get
    /// home.
    pub fn go_out(&mut self, ctx: &mut BuildContext<'_>, deadline: Deadline, outing: &Outing) -> BehaviorResult<Outcome> {
        let back = ctx.distance(self.here(), self.home())?;
        let budget = outing.max_away.saturating_sub(self.away() + back);
        let room = deadline.at.saturating_sub(self.now() + ctx.distance(self.here(), deadline.place)? + 1);
        let limit = budget.min(room);
        if limit == 0 {
            return Ok(Outcome::HomeInstead { cap: None });
        }

        let units = 1 + ctx.rng.below(limit);
        if self.visit(ctx, deadline, units, outing.radius)? {
            Ok(Outcome::Visited)
        } else {
            Ok(Outcome::HomeInstead { cap: Some(units) })
        }
    }

    /// Look for a place near home with visitor room over the next `units`
    /// units, go there, and reserve the stay.  Returns `false` without
    /// moving when no such place fits before `deadline`.
    pub fn visit(
        &mut self,
        ctx:      &mut BuildContext<'_>,
        deadline: Deadline,
        units:    TimeUnit,
        radius:   Option<u32>,
    ) -> BehaviorResult<bool> {
        let units = units.max(1);
        // Reaching the place must leave at least one unit there.
        let reach = radius.map_or(units - 1, |r| r.min(units - 1));
        let window = Admission::visitor(self.now(), self.now() + units);
        let request = SearchRequest::new(ctx.cell(self.home())?, window).radius(Some(reach));
        let Some(place) = ctx.index.find_available_building(&request) else {
            return Ok(false);
        };
        if place == self.home() {
            return Ok(false);
        }

        let there = ctx.distance(self.here(), place)?;
        let slack = deadline.at.saturating_sub(self.now() + there + ctx.distance(place, deadline.place)? + 1);
        let length = units.saturating_sub(there).min(slack);
        if length == 0 {
            return Ok(false);
        }

        self.travel(ctx, place, Role::Visitor, Some(units))?;
        ctx.index.reserve(place, &Admission::visitor(self.now(), self.now() + length))?;
        self.stay(length);
        Ok(true)
    }

    /// Free-choice loop until `deadline` is due.  A `Job` draw is a
    /// one-unit wait for roles without a job.
    pub fn free_time(&mut self, ctx: &mut BuildContext<'_>, deadline: Deadline, outing: &Outing) -> BehaviorResult<()> {
        while !self.due(ctx, deadline)? {
            if self.must_rest(ctx, outing.max_away)? {
                self.rest(ctx, deadline)?;
                continue;
            }
            match Activity::draw(&outing.weights, ctx.rng) {
                Activity::Home => self.spend_at_home(ctx, deadline, None)?,
                Activity::Out  => self.spend_out(ctx, deadline, outing)?,
                Activity::Job  => self.stay(1),
            }
        }
        Ok(())
    }

    /// Be at `school` as a visitor for the bell at `at`.
    pub fn escort(&mut self, ctx: &mut BuildContext<'_>, school: BuildingId, at: TimeUnit) -> BehaviorResult<()> {
        let limit = at.saturating_sub(self.now());
        self.travel(ctx, school, Role::Visitor, Some(limit))?;
        self.stay_until(at.max(self.now() + 1));
        Ok(())
    }
}
