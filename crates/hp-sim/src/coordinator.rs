//! Per-family resource assignment and builder dispatch.
//!
//! For one family, in order:
//!
//! 1. search and reserve a job for every employed adult and a school seat
//!    for every school child; a miss marks the person as not attending;
//! 2. resolve the daycare when an employed caregiver has children under five;
//! 3. derive the caregiver's duties and the bells of the schools they escort;
//! 4. build the caregiver's week, then the other independent members, then
//!    the dependents, which read the caregiver's finished schedule.

use log::{debug, warn};

use hp_behavior::{
    BuildContext, CareDuties, Household, Plan, SchoolDuty, SchoolTimes, Timetable, builder_for,
    radius_for,
};
use hp_core::{BuildingId, CellPos};
use hp_schedule::{Schedule, ScheduleKind};
use hp_spatial::{Admission, SearchRequest};

use crate::{Family, Person, SimError, SimResult};

pub struct FamilyCoordinator;

impl FamilyCoordinator {
    /// Fill in the schedule of every member of `family`.
    pub fn generate(family: &mut Family, ctx: &mut BuildContext<'_>) -> SimResult<()> {
        let origin = ctx.index.location(family.home)?;
        let caregiver = family.caregiver();

        for person in &mut family.members {
            assign_attendance(person, origin, ctx)?;
        }
        let daycare = resolve_daycare(family, origin, ctx)?;
        family.daycare = daycare;
        for person in &mut family.members {
            if person.kind() == ScheduleKind::YoungChild {
                person.schedule.set_assigned(daycare);
                person.schedule.set_attends_job_or_school(daycare.is_some());
            }
        }

        let (duties, school_times) = caregiver_duties(family, ctx)?;
        debug!(
            "{}: caregiver {:?}, daycare {:?}, duties {:?}, {} school bells",
            family.id,
            caregiver.map(|c| family.members[c].id),
            daycare,
            duties,
            school_times.events().len(),
        );

        let others = (0..family.members.len()).filter(|&i| Some(i) != caregiver);
        let (dependents, independents): (Vec<usize>, Vec<usize>) =
            others.partition(|&i| family.members[i].kind().is_dependent());
        let order = caregiver.into_iter().chain(independents).chain(dependents);

        for i in order {
            let person = family.members[i].id;
            let kind = family.members[i].kind();
            let plan = take_plan(&mut family.members[i]);
            let household = Household {
                home:         family.home,
                daycare,
                duties:       if Some(i) == caregiver { duties } else { CareDuties::default() },
                school_times: &school_times,
                caregiver:    caregiver
                    .filter(|_| kind.is_dependent())
                    .map(|c| &family.members[c].schedule),
            };
            let schedule = builder_for(kind)
                .build(plan, &household, ctx)
                .map_err(|source| SimError::Behavior { person, source })?;
            schedule.validate().map_err(|source| SimError::Schedule { person, source })?;
            family.members[i].schedule = schedule;
        }
        Ok(())
    }
}

/// Hand the person's empty schedule to a builder, leaving a placeholder.
fn take_plan(person: &mut Person) -> Plan {
    let kind = person.kind();
    let schedule = std::mem::replace(&mut person.schedule, Schedule::new(kind));
    Plan::new(person.age, schedule)
}

/// Nearest building admitting `admission`, reserved on success.
fn reserve_nearest(
    ctx:       &mut BuildContext<'_>,
    origin:    CellPos,
    admission: Admission,
    radius:    Option<u32>,
) -> SimResult<Option<BuildingId>> {
    let req = SearchRequest::new(origin, admission).radius(radius);
    let Some(found) = ctx.index.find_available_building(&req) else {
        return Ok(None);
    };
    ctx.index.reserve(found, &admission)?;
    Ok(Some(found))
}

fn assign_attendance(person: &mut Person, origin: CellPos, ctx: &mut BuildContext<'_>) -> SimResult<()> {
    let kind = person.kind();
    let (admission, what) = match kind {
        ScheduleKind::EmployedAdult => (Admission::employee(1), "job"),
        ScheduleKind::YoungSchoolChild | ScheduleKind::OlderSchoolChild => {
            (Admission::student(person.age), "school")
        }
        _ => return Ok(()),
    };
    let radius = radius_for(&ctx.config.radius_limits, kind, person.age);
    let found = reserve_nearest(ctx, origin, admission, radius)?;
    match found {
        Some(building) => debug!("{}: {what} at {building}", person.id),
        None => warn!("{}: no {what} within radius {radius:?} of {origin}; not attending", person.id),
    }
    person.schedule.set_assigned(found);
    person.schedule.set_attends_job_or_school(found.is_some());
    Ok(())
}

/// Daycare for the family's children under five.  Only an employed
/// caregiver uses one; a pre-assigned daycare is tried before searching.
fn resolve_daycare(family: &Family, origin: CellPos, ctx: &mut BuildContext<'_>) -> SimResult<Option<BuildingId>> {
    let young = family.members.iter().filter(|p| p.kind() == ScheduleKind::YoungChild).count() as u32;
    let employed_caregiver = family
        .caregiver()
        .is_some_and(|c| family.members[c].kind() == ScheduleKind::EmployedAdult);
    if young == 0 || !employed_caregiver {
        return Ok(None);
    }

    let admission = Admission::daycare(young);
    let daycare = match family.daycare {
        Some(preset) if ctx.index.admits(preset, &admission) => {
            ctx.index.reserve(preset, &admission)?;
            Some(preset)
        }
        _ => {
            let radius = radius_for(&ctx.config.radius_limits, ScheduleKind::YoungChild, 0);
            reserve_nearest(ctx, origin, admission, radius)?
        }
    };
    if daycare.is_none() {
        warn!("{}: no daycare for {young} children; they stay with the caregiver", family.id);
    }
    Ok(daycare)
}

/// What the caregiver owes the school children, and the bells of the schools
/// they take young school children to.
fn caregiver_duties(family: &Family, ctx: &BuildContext<'_>) -> SimResult<(CareDuties, SchoolTimes)> {
    let mut timetables = Vec::new();
    for person in &family.members {
        if person.kind() != ScheduleKind::YoungSchoolChild {
            continue;
        }
        let Some(school) = person.schedule.assigned().filter(|_| person.schedule.attends_job_or_school()) else {
            continue;
        };
        let timetable = Timetable::of(&*ctx.index, school)
            .map_err(|source| SimError::Behavior { person: person.id, source })?;
        timetables.push(timetable);
    }
    let times = SchoolTimes::new(timetables);

    let school = if !times.is_empty() {
        SchoolDuty::Escort
    } else if family.has_kind(ScheduleKind::YoungSchoolChild) || family.has_kind(ScheduleKind::OlderSchoolChild) {
        SchoolDuty::Supervise
    } else {
        SchoolDuty::None
    };
    let duties = CareDuties { young_child: family.has_kind(ScheduleKind::YoungChild), school };
    Ok((duties, times))
}
