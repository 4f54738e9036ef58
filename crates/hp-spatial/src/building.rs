//! Buildings and their capacity ledger.
//!
//! # Kinds
//!
//! Every building carries a closed [`BuildingKind`] with the capacity
//! counters that make sense for it:
//!
//! | Kind           | Capacities                                   |
//! |----------------|----------------------------------------------|
//! | `Home`         | none (homes are never searched for)          |
//! | `Business`     | employees                                    |
//! | `Medical`      | employees, patients                          |
//! | `School`       | employees, students by grade band, timetable |
//! | `Daycare`      | children                                     |
//! | `TransportHub` | none (transit slots only)                    |
//!
//! Independently of kind, a building may accept visitors.  Visitor capacity
//! is time-indexed: [`VisitorLedger`] keeps one occupancy counter per time
//! unit of the week so concurrent visitors never exceed the maximum at any
//! instant.

use hp_core::{BuildingId, CellPos, Role, SimRng, TimeUnit, WEEK_LENGTH};

// ── Capacity ──────────────────────────────────────────────────────────────────

/// A `current / max` counter for one role.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Capacity {
    pub current: u32,
    pub max:     u32,
}

impl Capacity {
    pub const fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.current)
    }

    #[inline]
    pub fn can_take(&self, count: u32) -> bool {
        self.remaining() >= count
    }

    fn take(&mut self, count: u32) {
        self.current += count;
    }
}

// ── Visitor ledger ────────────────────────────────────────────────────────────

/// Per-time-unit visitor occupancy over one week.
#[derive(Clone, Debug, Default)]
pub struct VisitorLedger {
    max:       u32,
    occupancy: Vec<u32>,
}

impl VisitorLedger {
    pub fn new(max: u32) -> Self {
        let occupancy = if max > 0 { vec![0; WEEK_LENGTH as usize] } else { Vec::new() };
        Self { max, occupancy }
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Visitors present during time unit `t`.
    pub fn at(&self, t: TimeUnit) -> u32 {
        self.occupancy.get(t as usize).copied().unwrap_or(0)
    }

    /// `true` if `count` more visitors fit at every unit of `[start, end)`.
    pub fn has_room(&self, start: TimeUnit, end: TimeUnit, count: u32) -> bool {
        if self.max == 0 || count > self.max {
            return false;
        }
        let (s, e) = clip(start, end);
        self.occupancy[s..e].iter().all(|&n| n + count <= self.max)
    }

    fn reserve(&mut self, start: TimeUnit, end: TimeUnit, count: u32) {
        let (s, e) = clip(start, end);
        for n in &mut self.occupancy[s..e] {
            *n += count;
        }
    }
}

fn clip(start: TimeUnit, end: TimeUnit) -> (usize, usize) {
    let e = end.min(WEEK_LENGTH) as usize;
    let s = (start as usize).min(e);
    (s, e)
}

// ── Schools ───────────────────────────────────────────────────────────────────

/// Grade range a school teaches.  Grade = age − 5.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GradeBand {
    Elementary,
    Middle,
    High,
}

impl GradeBand {
    /// Inclusive `(first, last)` grade.
    pub fn grades(self) -> (u8, u8) {
        match self {
            GradeBand::Elementary => (0, 5),
            GradeBand::Middle     => (6, 8),
            GradeBand::High       => (9, 12),
        }
    }

    pub fn admits_age(self, age: u8) -> bool {
        let Some(grade) = age.checked_sub(5) else { return false };
        let (first, last) = self.grades();
        (first..=last).contains(&grade)
    }
}

/// Students per teacher.
const CLASS_SIZE: u32 = 30;

/// School-specific state: staff, student seats, and the daily timetable.
#[derive(Clone, Debug)]
pub struct School {
    pub employees:  Capacity,
    pub students:   Capacity,
    pub band:       GradeBand,
    /// Time of day classes begin.
    pub start_time: TimeUnit,
    /// Time of day classes end.
    pub end_time:   TimeUnit,
}

impl School {
    /// A school with `staff` posts.  A fifth of the staff teach, thirty
    /// students each; the timetable starts between 07:00 and 09:50 and lasts
    /// six to eight hours.
    pub fn new(staff: u32, band: GradeBand, rng: &mut SimRng) -> Self {
        let start_time = 42 + rng.below(18);
        let end_time   = start_time + 36 + rng.below(12);
        Self::with_timetable(staff, band, start_time, end_time)
    }

    pub fn with_timetable(staff: u32, band: GradeBand, start_time: TimeUnit, end_time: TimeUnit) -> Self {
        let teachers = (staff as f64 * 0.2).ceil() as u32;
        Self {
            employees: Capacity::new(staff),
            students:  Capacity::new(teachers * CLASS_SIZE),
            band,
            start_time,
            end_time,
        }
    }

    /// `true` if `count` children of `age` can enrol.
    pub fn has_grade_available(&self, age: u8, count: u32) -> bool {
        self.band.admits_age(age) && self.students.can_take(count)
    }
}

// ── BuildingKind ──────────────────────────────────────────────────────────────

/// What a building is, with its kind-specific capacities.
#[derive(Clone, Debug)]
pub enum BuildingKind {
    Home,
    Business { employees: Capacity },
    Medical { employees: Capacity, patients: Capacity },
    School(School),
    Daycare { children: Capacity },
    TransportHub,
}

impl BuildingKind {
    pub fn business(employees: u32) -> Self {
        BuildingKind::Business { employees: Capacity::new(employees) }
    }

    pub fn medical(employees: u32, patients: u32) -> Self {
        BuildingKind::Medical {
            employees: Capacity::new(employees),
            patients:  Capacity::new(patients),
        }
    }

    pub fn daycare(children: u32) -> Self {
        BuildingKind::Daycare { children: Capacity::new(children) }
    }

    /// One-character tag used in logs and CSV output.
    pub fn tag(&self) -> char {
        match self {
            BuildingKind::Home            => 'H',
            BuildingKind::Business { .. } => 'B',
            BuildingKind::Medical { .. }  => 'M',
            BuildingKind::School(_)       => 'S',
            BuildingKind::Daycare { .. }  => 'D',
            BuildingKind::TransportHub    => 'T',
        }
    }

    fn employees(&self) -> Option<&Capacity> {
        match self {
            BuildingKind::Business { employees }
            | BuildingKind::Medical { employees, .. } => Some(employees),
            BuildingKind::School(s) => Some(&s.employees),
            _ => None,
        }
    }

    fn employees_mut(&mut self) -> Option<&mut Capacity> {
        match self {
            BuildingKind::Business { employees }
            | BuildingKind::Medical { employees, .. } => Some(employees),
            BuildingKind::School(s) => Some(&mut s.employees),
            _ => None,
        }
    }
}

// ── Admission ─────────────────────────────────────────────────────────────────

/// A request to occupy a building: role, time window, head count, and (for
/// students) the child's age.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Admission {
    pub role:  Role,
    pub start: TimeUnit,
    pub end:   TimeUnit,
    pub count: u32,
    pub age:   u8,
}

impl Admission {
    fn whole_week(role: Role, count: u32) -> Self {
        Self { role, start: 0, end: WEEK_LENGTH, count, age: 0 }
    }

    pub fn employee(count: u32) -> Self {
        Self::whole_week(Role::Employee, count)
    }

    pub fn patient(count: u32) -> Self {
        Self::whole_week(Role::Patient, count)
    }

    pub fn daycare(count: u32) -> Self {
        Self::whole_week(Role::DaycareChild, count)
    }

    pub fn student(age: u8) -> Self {
        Self { age, ..Self::whole_week(Role::Student, 1) }
    }

    /// One visitor over `[start, end)`.
    pub fn visitor(start: TimeUnit, end: TimeUnit) -> Self {
        Self { role: Role::Visitor, start, end, count: 1, age: 0 }
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// One building in the spatial index arena.
#[derive(Clone, Debug)]
pub struct Building {
    pub id:   BuildingId,
    pub cell: CellPos,
    pub kind: BuildingKind,
    visitors: VisitorLedger,
}

impl Building {
    pub fn new(id: BuildingId, cell: CellPos, kind: BuildingKind, max_visitors: u32) -> Self {
        Self { id, cell, kind, visitors: VisitorLedger::new(max_visitors) }
    }

    pub fn visitors(&self) -> &VisitorLedger {
        &self.visitors
    }

    pub fn as_school(&self) -> Option<&School> {
        match &self.kind {
            BuildingKind::School(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_daycare(&self) -> bool {
        matches!(self.kind, BuildingKind::Daycare { .. })
    }

    /// `true` if the building can take `req` without exceeding any declared
    /// maximum.
    pub fn admits(&self, req: &Admission) -> bool {
        match (req.role, &self.kind) {
            (Role::Employee, kind) => kind.employees().is_some_and(|c| c.can_take(req.count)),
            (Role::Visitor, _) => self.visitors.has_room(req.start, req.end, req.count),
            (Role::Patient, BuildingKind::Medical { patients, .. }) => patients.can_take(req.count),
            (Role::Student, BuildingKind::School(s)) => s.has_grade_available(req.age, req.count),
            (Role::DaycareChild, BuildingKind::Daycare { children }) => children.can_take(req.count),
            _ => false,
        }
    }

    /// Record `req` against the ledger.  The caller checks [`admits`][Self::admits] first.
    pub(crate) fn commit(&mut self, req: &Admission) {
        match (req.role, &mut self.kind) {
            (Role::Employee, kind) => {
                if let Some(c) = kind.employees_mut() {
                    c.take(req.count);
                }
            }
            (Role::Visitor, _) => self.visitors.reserve(req.start, req.end, req.count),
            (Role::Patient, BuildingKind::Medical { patients, .. }) => patients.take(req.count),
            (Role::Student, BuildingKind::School(s)) => s.students.take(req.count),
            (Role::DaycareChild, BuildingKind::Daycare { children }) => children.take(req.count),
            _ => {}
        }
    }
}
