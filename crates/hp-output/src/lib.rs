//! `hp-output` — writers for generated schedules.
//!
//! | Backend | Files created                      |
//! |---------|------------------------------------|
//! | CSV     | `schedules.csv`, `people.csv`      |
//!
//! `schedules.csv` is the format read back by
//! `hp_schedule::load_schedules_csv`.  Writers implement [`ScheduleWriter`]
//! and are driven either directly ([`write_population`]) or while the
//! generator runs through [`ScheduleWriterObserver`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use hp_output::{CsvScheduleWriter, ScheduleWriterObserver};
//!
//! let writer = CsvScheduleWriter::new(Path::new("./output"))?;
//! let mut obs = ScheduleWriterObserver::new(writer);
//! generator.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvScheduleWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleWriterObserver;
pub use row::{PersonRow, SlotRow, slot_rows};
pub use writer::{ScheduleWriter, write_population};
