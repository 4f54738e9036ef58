//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per time slot, rows of a person in slot order.  The writer in
//! `hp-output` produces exactly this layout.
//!
//! ```csv
//! person_id,family_id,kind,slot,building_id,role,end_time
//! 0,0,4,0,3,H,52
//! 0,0,4,1,17,C,53
//! 0,0,4,2,9,V,70
//! 0,0,4,3,3,H,1008
//! ```
//!
//! `kind` is the numeric `ScheduleKind` code, `role` the one-letter `Role`
//! code.  Every loaded schedule is validated: a file that does not cover
//! the full week for some person is rejected.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hp_core::{BuildingId, FamilyId, PersonId, Role};

use crate::{Schedule, ScheduleError, ScheduleKind, TimeSlot};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SlotRecord {
    person_id:   u32,
    family_id:   u32,
    kind:        u8,
    slot:        u32,
    building_id: u32,
    role:        char,
    end_time:    u32,
}

/// A schedule read back from disk with its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedSchedule {
    pub person:   PersonId,
    pub family:   FamilyId,
    pub schedule: Schedule,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every schedule in a `schedules.csv` file, ordered by person id.
pub fn load_schedules_csv(path: &Path) -> Result<Vec<LoadedSchedule>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_schedules_reader(file)
}

/// Like [`load_schedules_csv`] but accepts any `Read` source.
pub fn load_schedules_reader<R: Read>(reader: R) -> Result<Vec<LoadedSchedule>, ScheduleError> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_person: BTreeMap<u32, Vec<SlotRecord>> = BTreeMap::new();

    for result in csv_reader.deserialize::<SlotRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        by_person.entry(row.person_id).or_default().push(row);
    }

    // ── Build one Schedule per person ─────────────────────────────────────
    by_person
        .into_iter()
        .map(|(person_id, mut rows)| {
            rows.sort_by_key(|r| r.slot);
            let first = &rows[0];
            let family = FamilyId(first.family_id);
            let kind = ScheduleKind::from_code(first.kind).ok_or_else(|| {
                ScheduleError::Parse(format!("person {person_id}: unknown schedule kind {}", first.kind))
            })?;

            let slots = rows
                .iter()
                .map(|r| {
                    let role = Role::from_code(r.role).ok_or_else(|| {
                        ScheduleError::Parse(format!("person {person_id}: unknown role code {:?}", r.role))
                    })?;
                    Ok(TimeSlot::new(BuildingId(r.building_id), r.end_time, role))
                })
                .collect::<Result<Vec<_>, ScheduleError>>()?;

            Ok(LoadedSchedule {
                person:   PersonId(person_id),
                family,
                schedule: Schedule::from_slots(kind, slots)?,
            })
        })
        .collect()
}
