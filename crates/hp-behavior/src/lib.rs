//! `hp-behavior` — per-person weekly schedule builders.
//!
//! # Crate layout
//!
//! | Module                 | Contents                                                       |
//! |------------------------|----------------------------------------------------------------|
//! | [`builder`]            | `ScheduleBuilder` trait, `builder_for(kind)` dispatch          |
//! | [`context`]            | `BuildContext`, `Household`, `CareDuties`, `Plan`              |
//! | [`itinerary`]          | `Itinerary` — clock, location and rest counters of one week    |
//! | [`activity`]           | free-choice draw, home/out/rest helpers, school escort         |
//! | [`school`]             | `Timetable`, `SchoolTimes` bell list                           |
//! | [`young_child`]        | under five: mirror caregiver or wait in daycare                |
//! | [`young_school_child`] | five to thirteen: school hours, caregiver otherwise            |
//! | [`older_school_child`] | fourteen to seventeen: school plus free time                   |
//! | [`employed_adult`]     | job budget, daycare drop-off, school runs                      |
//! | [`unemployed_adult`]   | free time plus school runs                                     |
//! | [`error`]              | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! Builders for independent people drive an [`Itinerary`] through seven day
//! loops.  The loops are built from helpers that each advance the clock by at
//! least one unit, so a week always terminates, and the itinerary closes the
//! last stay at `WEEK_LENGTH`, so every schedule covers the week.
//!
//! Dependent builders never draw random numbers: they derive the child's
//! week from the caregiver's finished schedule.

pub mod activity;
pub mod builder;
pub mod context;
pub mod employed_adult;
pub mod error;
pub mod itinerary;
pub mod older_school_child;
pub mod school;
pub mod unemployed_adult;
pub mod young_child;
pub mod young_school_child;


pub use activity::{Activity, Outcome, Outing};
pub use builder::{ScheduleBuilder, builder_for};
pub use context::{BuildContext, CareDuties, Household, Plan, SchoolDuty, radius_for};
pub use employed_adult::EmployedAdultBuilder;
pub use error::{BehaviorError, BehaviorResult};
pub use itinerary::{Deadline, Itinerary, REST_THRESHOLD};
pub use older_school_child::OlderSchoolChildBuilder;
pub use school::{Bell, SchoolEvent, SchoolTimes, Timetable};
pub use unemployed_adult::UnemployedAdultBuilder;
pub use young_child::YoungChildBuilder;
pub use young_school_child::YoungSchoolChildBuilder;
