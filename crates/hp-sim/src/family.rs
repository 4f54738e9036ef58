//! People, households, and the population that owns them.

use std::fmt;

use hp_core::{BuildingId, FamilyId, PersonId};
use hp_schedule::{Schedule, ScheduleKind};

use crate::{SimError, SimResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male   => "M",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// One member of the population.  The schedule starts empty and is filled
/// exactly once by the generator.
#[derive(Clone, Debug)]
pub struct Person {
    pub id:       PersonId,
    pub age:      u8,
    pub gender:   Gender,
    pub schedule: Schedule,
}

impl Person {
    pub fn new(id: PersonId, age: u8, gender: Gender, kind: ScheduleKind) -> Self {
        Self { id, age, gender, schedule: Schedule::new(kind) }
    }

    #[inline]
    pub fn kind(&self) -> ScheduleKind {
        self.schedule.kind()
    }
}

// ── Family ────────────────────────────────────────────────────────────────────

/// A household sharing one home and, optionally, one daycare.
#[derive(Clone, Debug)]
pub struct Family {
    pub id:      FamilyId,
    pub home:    BuildingId,
    pub daycare: Option<BuildingId>,
    pub members: Vec<Person>,
}

impl Family {
    pub fn new(id: FamilyId, home: BuildingId) -> Self {
        Self { id, home, daycare: None, members: Vec::new() }
    }

    /// Index into `members` of the adult who looks after the children: the
    /// first unemployed adult, else the first employed one.
    pub fn caregiver(&self) -> Option<usize> {
        let first = |kind| self.members.iter().position(|p| p.kind() == kind);
        first(ScheduleKind::UnemployedAdult).or_else(|| first(ScheduleKind::EmployedAdult))
    }

    pub fn has_dependents(&self) -> bool {
        self.members.iter().any(|p| p.kind().is_dependent())
    }

    pub fn has_kind(&self, kind: ScheduleKind) -> bool {
        self.members.iter().any(|p| p.kind() == kind)
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Every family of a run, in generation order.
///
/// Person ids are dense and assigned in insertion order across families, so
/// `PersonId(n)` is the n-th person added.
#[derive(Clone, Debug, Default)]
pub struct Population {
    families: Vec<Family>,
    /// `PersonId` → (family index, member index).
    people:   Vec<(u32, u32)>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_family(&mut self, home: BuildingId) -> FamilyId {
        let id = FamilyId(self.families.len() as u32);
        self.families.push(Family::new(id, home));
        id
    }

    /// Give `family` a pre-assigned daycare.  Families without one get a
    /// daycare searched for them when they need it.
    pub fn set_daycare(&mut self, family: FamilyId, daycare: BuildingId) -> SimResult<()> {
        self.family_mut(family)?.daycare = Some(daycare);
        Ok(())
    }

    pub fn add_person(
        &mut self,
        family: FamilyId,
        age:    u8,
        gender: Gender,
        kind:   ScheduleKind,
    ) -> SimResult<PersonId> {
        let id = PersonId(self.people.len() as u32);
        let slot = self.family_mut(family)?.members.len() as u32;
        self.people.push((family.0, slot));
        self.family_mut(family)?.members.push(Person::new(id, age, gender, kind));
        Ok(id)
    }

    pub fn family(&self, id: FamilyId) -> Option<&Family> {
        self.families.get(id.index())
    }

    fn family_mut(&mut self, id: FamilyId) -> SimResult<&mut Family> {
        self.families.get_mut(id.index()).ok_or(SimError::UnknownFamily(id))
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub(crate) fn families_mut(&mut self) -> &mut [Family] {
        &mut self.families
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        let &(f, m) = self.people.get(id.index())?;
        self.families.get(f as usize)?.members.get(m as usize)
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Every person with their family, family by family.
    pub fn people(&self) -> impl Iterator<Item = (&Family, &Person)> + '_ {
        self.families.iter().flat_map(|f| f.members.iter().map(move |p| (f, p)))
    }
}
