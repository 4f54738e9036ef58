//! The `ScheduleBuilder` trait and the per-kind dispatch table.

use hp_schedule::{Schedule, ScheduleKind};

use crate::{
    BehaviorResult, BuildContext, EmployedAdultBuilder, Household, OlderSchoolChildBuilder, Plan,
    UnemployedAdultBuilder, YoungChildBuilder, YoungSchoolChildBuilder,
};

/// Builds one person's week.
///
/// Implementations run to completion without suspending and must return a
/// schedule that covers the whole week: strictly increasing end times, the
/// last one at `WEEK_LENGTH`.  Failed searches are never errors; a builder
/// falls back to a place it already knows.  Errors are reserved for broken
/// inputs such as unknown buildings or a dependent without a caregiver.
///
/// # Example
///
/// ```rust,ignore
/// let builder = builder_for(plan.kind());
/// let schedule = builder.build(plan, &household, &mut ctx)?;
/// schedule.validate()?;
/// ```
pub trait ScheduleBuilder: Send + Sync {
    fn build(
        &self,
        plan:      Plan,
        household: &Household<'_>,
        ctx:       &mut BuildContext<'_>,
    ) -> BehaviorResult<Schedule>;
}

/// The builder responsible for `kind`.
pub fn builder_for(kind: ScheduleKind) -> &'static dyn ScheduleBuilder {
    match kind {
        ScheduleKind::YoungChild       => &YoungChildBuilder,
        ScheduleKind::YoungSchoolChild => &YoungSchoolChildBuilder,
        ScheduleKind::OlderSchoolChild => &OlderSchoolChildBuilder,
        ScheduleKind::EmployedAdult    => &EmployedAdultBuilder,
        ScheduleKind::UnemployedAdult  => &UnemployedAdultBuilder,
    }
}
