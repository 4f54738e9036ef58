//! Inputs handed to every schedule builder.

use hp_core::{BuildingId, CellPos, RadiusLimits, SimRng, SimulationConfig};
use hp_mobility::TransportModel;
use hp_schedule::{Schedule, ScheduleKind};
use hp_spatial::SpatialIndex;

use crate::{BehaviorResult, SchoolTimes};

// ── BuildContext ──────────────────────────────────────────────────────────────

/// Run-wide state shared by all builders of one generation run.
///
/// The spatial index is borrowed mutably because visits, jobs and school
/// seats are reserved while schedules are built.  The RNG is the single
/// generator of the run; builders draw from it in a fixed order, so a run is
/// reproducible from the seed alone.
pub struct BuildContext<'a> {
    pub index:     &'a mut SpatialIndex,
    pub transport: &'a TransportModel,
    pub config:    &'a SimulationConfig,
    pub rng:       &'a mut SimRng,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        index:     &'a mut SpatialIndex,
        transport: &'a TransportModel,
        config:    &'a SimulationConfig,
        rng:       &'a mut SimRng,
    ) -> Self {
        Self { index, transport, config, rng }
    }

    #[inline]
    pub fn cell(&self, building: BuildingId) -> BehaviorResult<CellPos> {
        Ok(self.index.location(building)?)
    }

    /// Chebyshev distance in cells between two buildings.  Used as a travel
    /// time estimate: no mode is slower than one cell per unit.
    #[inline]
    pub fn distance(&self, a: BuildingId, b: BuildingId) -> BehaviorResult<u32> {
        Ok(self.cell(a)?.chebyshev(self.cell(b)?))
    }
}

// ── Household ─────────────────────────────────────────────────────────────────

/// Supervision owed to the family's school-age children.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SchoolDuty {
    #[default]
    None,
    /// Only older school children: tighter curfew, no school runs.
    Supervise,
    /// A young school child: tighter curfew plus drop-off and pick-up.
    Escort,
}

/// What the person building a schedule is responsible for.  Only the
/// family's caregiver carries duties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CareDuties {
    /// A child under five follows this person (or waits in daycare).
    pub young_child: bool,
    pub school:      SchoolDuty,
}

impl CareDuties {
    pub fn supervising(&self) -> bool {
        self.school != SchoolDuty::None
    }
}

/// The family-level view a builder needs.
#[derive(Clone, Debug)]
pub struct Household<'a> {
    pub home:         BuildingId,
    pub daycare:      Option<BuildingId>,
    pub duties:       CareDuties,
    /// School bells of the family's school children, time of day.
    pub school_times: &'a SchoolTimes,
    /// The caregiver's finished schedule, for dependents.
    pub caregiver:    Option<&'a Schedule>,
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// A person as handed to a builder: their age and an empty schedule that
/// already carries the kind and the job/school/daycare assignment.
#[derive(Clone, Debug)]
pub struct Plan {
    pub age:      u8,
    pub schedule: Schedule,
}

impl Plan {
    pub fn new(age: u8, schedule: Schedule) -> Self {
        Self { age, schedule }
    }

    pub fn kind(&self) -> ScheduleKind {
        self.schedule.kind()
    }

    /// The assigned building, if the person actually attends it.
    pub fn attended(&self) -> Option<BuildingId> {
        self.schedule.assigned().filter(|_| self.schedule.attends_job_or_school())
    }
}

/// Search radius for a person of `kind` and `age`.
pub fn radius_for(limits: &RadiusLimits, kind: ScheduleKind, age: u8) -> Option<u32> {
    match kind {
        ScheduleKind::YoungChild                   => limits.young_child,
        ScheduleKind::YoungSchoolChild             => limits.young_school_child,
        ScheduleKind::OlderSchoolChild if age < 16 => limits.older_school_child_under_16,
        ScheduleKind::OlderSchoolChild             => limits.older_school_child_16_plus,
        ScheduleKind::EmployedAdult                => limits.employed_adult,
        ScheduleKind::UnemployedAdult              => limits.unemployed_adult,
    }
}
