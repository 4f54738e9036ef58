//! `hp-schedule` — weekly schedules, playback, and CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`schedule`]  | `TimeSlot`, `ScheduleKind`, `Schedule`                    |
//! | [`cursor`]    | `ScheduleCursor` (unit-by-unit playback)                  |
//! | [`loader`]    | `load_schedules_csv`, `load_schedules_reader`             |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Week model (summary)
//!
//! ```text
//! slot i covers [end_time(i-1), end_time(i))     end_time(-1) = 0
//! last slot ends at WEEK_LENGTH = 1008
//! ```
//!
//! Schedules are built once by the generator and read-only afterwards;
//! `location_at(t)` answers "where is this person at unit t".

pub mod cursor;
pub mod error;
pub mod loader;
pub mod schedule;


pub use cursor::ScheduleCursor;
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{LoadedSchedule, load_schedules_csv, load_schedules_reader};
pub use schedule::{Schedule, ScheduleKind, TimeSlot};
