//! Plain data row types written by output backends.

use hp_core::Role;
use hp_sim::{Family, Person};

/// One time slot of one person's week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRow {
    pub person_id:   u32,
    pub family_id:   u32,
    /// `ScheduleKind` code.
    pub kind:        u8,
    /// Position of the slot within the person's schedule.
    pub slot:        u32,
    pub building_id: u32,
    pub role:        Role,
    pub end_time:    u32,
}

/// One person with their assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonRow {
    pub person_id:         u32,
    pub family_id:         u32,
    pub age:               u8,
    pub gender:            &'static str,
    pub kind:              u8,
    /// Job, school or daycare; `None` if nothing was assigned.
    pub assigned_building: Option<u32>,
    pub attends:           bool,
}

impl PersonRow {
    pub fn new(family: &Family, person: &Person) -> Self {
        Self {
            person_id:         person.id.0,
            family_id:         family.id.0,
            age:               person.age,
            gender:            person.gender.as_str(),
            kind:              person.kind().code(),
            assigned_building: person.schedule.assigned().map(|b| b.0),
            attends:           person.schedule.attends_job_or_school(),
        }
    }
}

/// Every slot of `person`, in order.
pub fn slot_rows<'a>(family: &'a Family, person: &'a Person) -> impl Iterator<Item = SlotRow> + 'a {
    person.schedule.slots().iter().enumerate().map(move |(i, slot)| SlotRow {
        person_id:   person.id.0,
        family_id:   family.id.0,
        kind:        person.kind().code(),
        slot:        i as u32,
        building_id: slot.location.0,
        role:        slot.role,
        end_time:    slot.end_time,
    })
}
