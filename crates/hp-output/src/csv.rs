//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `schedules.csv`: `person_id,family_id,kind,slot,building_id,role,end_time`
//! - `people.csv`: `person_id,family_id,age,gender,kind,assigned_building,attends`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use hp_sim::Family;

use crate::OutputResult;
use crate::row::{PersonRow, SlotRow, slot_rows};
use crate::writer::ScheduleWriter;

/// Writes schedules and people to two CSV files.
pub struct CsvScheduleWriter {
    schedules: Writer<File>,
    people:    Writer<File>,
    finished:  bool,
}

impl CsvScheduleWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut schedules = Writer::from_path(dir.join("schedules.csv"))?;
        schedules.write_record(["person_id", "family_id", "kind", "slot", "building_id", "role", "end_time"])?;

        let mut people = Writer::from_path(dir.join("people.csv"))?;
        people.write_record(["person_id", "family_id", "age", "gender", "kind", "assigned_building", "attends"])?;

        Ok(Self { schedules, people, finished: false })
    }

    fn write_slot(&mut self, row: &SlotRow) -> OutputResult<()> {
        self.schedules.write_record(&[
            row.person_id.to_string(),
            row.family_id.to_string(),
            row.kind.to_string(),
            row.slot.to_string(),
            row.building_id.to_string(),
            row.role.code().to_string(),
            row.end_time.to_string(),
        ])?;
        Ok(())
    }

    fn write_person(&mut self, row: &PersonRow) -> OutputResult<()> {
        self.people.write_record(&[
            row.person_id.to_string(),
            row.family_id.to_string(),
            row.age.to_string(),
            row.gender.to_string(),
            row.kind.to_string(),
            row.assigned_building.map(|b| b.to_string()).unwrap_or_default(),
            (row.attends as u8).to_string(),
        ])?;
        Ok(())
    }
}

impl ScheduleWriter for CsvScheduleWriter {
    fn write_family(&mut self, family: &Family) -> OutputResult<()> {
        for person in &family.members {
            self.write_person(&PersonRow::new(family, person))?;
            for row in slot_rows(family, person) {
                self.write_slot(&row)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.schedules.flush()?;
        self.people.flush()?;
        Ok(())
    }
}
