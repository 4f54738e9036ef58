//! Who is where at one instant, and how the week is spent per kind.

use std::fmt;

use hp_core::{BuildingId, Role, TimeUnit, WEEK_LENGTH};
use hp_schedule::ScheduleKind;

use crate::{Family, Person, Population};

#[cfg(feature = "fx-hash")]
type BuildingMap<V> = rustc_hash::FxHashMap<BuildingId, V>;
#[cfg(not(feature = "fx-hash"))]
type BuildingMap<V> = std::collections::HashMap<BuildingId, V>;

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// Head count per role in one building.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts([u32; Role::ALL.len()]);

impl RoleCounts {
    #[inline]
    pub fn get(&self, role: Role) -> u32 {
        self.0[role as usize]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    fn add(&mut self, role: Role) {
        self.0[role as usize] += 1;
    }
}

/// Per-building occupancy at a single time unit.
#[derive(Clone, Debug)]
pub struct Occupancy {
    time:   TimeUnit,
    counts: BuildingMap<RoleCounts>,
}

impl Occupancy {
    pub fn time(&self) -> TimeUnit {
        self.time
    }

    /// Counts for `building`; all zero when nobody is there.
    pub fn at(&self, building: BuildingId) -> RoleCounts {
        self.counts.get(&building).copied().unwrap_or_default()
    }

    /// Occupied buildings, in no particular order.
    pub fn buildings(&self) -> impl Iterator<Item = (BuildingId, &RoleCounts)> + '_ {
        self.counts.iter().map(|(&id, counts)| (id, counts))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Time units spent per activity class, summed over every person of a kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KindSummary {
    pub people:    usize,
    pub home:      u64,
    /// Employee, student, patient or daycare time.
    pub attending: u64,
    pub visiting:  u64,
    pub transit:   u64,
}

impl KindSummary {
    fn merge(self, other: KindSummary) -> KindSummary {
        KindSummary {
            people:    self.people + other.people,
            home:      self.home + other.home,
            attending: self.attending + other.attending,
            visiting:  self.visiting + other.visiting,
            transit:   self.transit + other.transit,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    by_kind: [KindSummary; ScheduleKind::ALL.len()],
}

impl Summary {
    pub fn get(&self, kind: ScheduleKind) -> &KindSummary {
        &self.by_kind[kind.code() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScheduleKind, &KindSummary)> + '_ {
        ScheduleKind::ALL.into_iter().zip(self.by_kind.iter())
    }

    fn add(&mut self, person: &Person) {
        let entry = &mut self.by_kind[person.kind().code() as usize];
        entry.people += 1;
        for (start, slot) in person.schedule.intervals() {
            let units = u64::from(slot.end_time - start);
            match slot.role {
                Role::Home => entry.home += units,
                Role::Visitor => entry.visiting += units,
                r if r.is_transit() => entry.transit += units,
                _ => entry.attending += units,
            }
        }
    }

    fn merge(mut self, other: Summary) -> Summary {
        for (a, b) in self.by_kind.iter_mut().zip(other.by_kind) {
            *a = a.merge(b);
        }
        self
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, s) in self.iter().filter(|(_, s)| s.people > 0) {
            let per_person = |units: u64| units as f64 / s.people as f64;
            writeln!(
                f,
                "{kind:>20}: {:>7} people | home {:6.1} | attending {:6.1} | visiting {:6.1} | transit {:5.1}",
                s.people,
                per_person(s.home),
                per_person(s.attending),
                per_person(s.visiting),
                per_person(s.transit),
            )?;
        }
        Ok(())
    }
}

fn family_summary(family: &Family) -> Summary {
    let mut summary = Summary::default();
    for person in &family.members {
        summary.add(person);
    }
    summary
}

// ── Population queries ────────────────────────────────────────────────────────

impl Population {
    /// Where everybody is at time `t` (taken modulo the week).  People whose
    /// schedule has not been generated yet are skipped.
    pub fn occupancy_at(&self, t: TimeUnit) -> Occupancy {
        let time = t % WEEK_LENGTH;
        let mut counts: BuildingMap<RoleCounts> = BuildingMap::default();
        for (_, person) in self.people() {
            if let Some(slot) = person.schedule.location_at(time) {
                counts.entry(slot.location).or_default().add(slot.role);
            }
        }
        Occupancy { time, counts }
    }

    /// Per-kind time budget totals over the whole population.
    pub fn summary(&self) -> Summary {
        #[cfg(not(feature = "parallel"))]
        {
            self.families().iter().map(family_summary).fold(Summary::default(), Summary::merge)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.families().par_iter().map(family_summary).reduce(Summary::default, Summary::merge)
        }
    }
}
