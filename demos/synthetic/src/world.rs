//! Synthetic town: a square grid of residential, commercial and school
//! blocks, and a population of families living in it.

use hp_core::{BuildingId, CellPos, SimRng};
use hp_schedule::ScheduleKind;
use hp_sim::{Gender, Population};
use hp_spatial::{BuildingKind, GradeBand, School, SpatialIndex, SpatialIndexBuilder, SpatialResult};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Every `SCHOOL_SPACING`-th cell on both axes holds one school per band.
const SCHOOL_SPACING: u32 = 6;
const HOMES_PER_CELL: u32 = 6;

/// Build a `size × size` grid.  Cells with a school also get a daycare; every
/// other cell gets homes, a shop and, one in three, an office or a clinic.
pub fn build_town(size: u32, rng: &mut SimRng) -> SpatialResult<(SpatialIndex, Vec<BuildingId>)> {
    let mut b = SpatialIndexBuilder::new(size, size);
    b.add_hub_everywhere();
    let mut homes = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let cell = CellPos::new(row, col);
            if row % SCHOOL_SPACING == SCHOOL_SPACING / 2 && col % SCHOOL_SPACING == SCHOOL_SPACING / 2 {
                for band in [GradeBand::Elementary, GradeBand::Middle, GradeBand::High] {
                    let school = School::new(20 + rng.below(30), band, rng);
                    b.add_building(cell, BuildingKind::School(school), 10);
                }
                b.add_building(cell, BuildingKind::daycare(20 + rng.below(20)), 0);
                continue;
            }

            for _ in 0..HOMES_PER_CELL {
                homes.push(b.add_building(cell, BuildingKind::Home, 0));
            }
            b.add_building(cell, BuildingKind::business(2 + rng.below(6)), 15 + rng.below(25));
            let extra = rng.below(3);
            if extra == 0 {
                b.add_building(cell, BuildingKind::business(20 + rng.below(60)), 5);
            } else if extra == 1 && rng.gen_bool(0.3) {
                b.add_building(cell, BuildingKind::medical(10 + rng.below(20), 20), 10);
            }
        }
    }
    Ok((b.build()?, homes))
}

// ── Population ────────────────────────────────────────────────────────────────

/// One to five members: one or two adults, then children.
pub fn build_population(homes: &[BuildingId], families: usize, rng: &mut SimRng) -> hp_sim::SimResult<Population> {
    let mut population = Population::new();
    for _ in 0..families {
        if homes.is_empty() {
            break;
        }
        let home = homes[rng.below(homes.len() as u32) as usize];
        let family = population.add_family(home);

        let adults = 1 + rng.below(2);
        for _ in 0..adults {
            let age = 18 + rng.below(60) as u8;
            let kind = if age < 65 && rng.gen_bool(0.7) {
                ScheduleKind::EmployedAdult
            } else {
                ScheduleKind::UnemployedAdult
            };
            population.add_person(family, age, gender(rng), kind)?;
        }
        for _ in 0..rng.below(4) {
            let age = rng.below(18) as u8;
            population.add_person(family, age, gender(rng), kind_for_child(age))?;
        }
    }
    Ok(population)
}

fn gender(rng: &mut SimRng) -> Gender {
    if rng.gen_bool(0.5) { Gender::Female } else { Gender::Male }
}

fn kind_for_child(age: u8) -> ScheduleKind {
    match age {
        0..=4  => ScheduleKind::YoungChild,
        5..=13 => ScheduleKind::YoungSchoolChild,
        _      => ScheduleKind::OlderSchoolChild,
    }
}
