//! `hp-sim` — population model and the week-generation driver for the
//! haplos schedule synthesizer.
//!
//! # Generation loop
//!
//! ```text
//! for family in population (in order):
//!   ① Assign    — search + reserve job / school seat per member; a miss
//!                 clears the attendance flag.
//!   ② Daycare   — resolved only for an employed caregiver with children
//!                 under five.
//!   ③ Duties    — caregiver curfew and school runs from the children's
//!                 schools.
//!   ④ Build     — caregiver, other independents, then dependents reading
//!                 the caregiver's finished schedule.
//!   ⑤ Observe   — on_family_done, and on_progress every N families.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `Population::summary` runs on Rayon's thread pool.       |
//! | `fx-hash`  | FxHash for the per-building occupancy map.               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hp_sim::{Gender, GeneratorBuilder, NoopObserver, Population};
//!
//! let mut population = Population::new();
//! let family = population.add_family(home);
//! population.add_person(family, 40, Gender::Female, ScheduleKind::UnemployedAdult)?;
//!
//! let mut generator = GeneratorBuilder::new(config, index)
//!     .population(population)
//!     .build()?;
//! generator.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod family;
pub mod generator;
pub mod observer;
pub mod occupancy;


pub use builder::GeneratorBuilder;
pub use coordinator::FamilyCoordinator;
pub use error::{SimError, SimResult};
pub use family::{Family, Gender, Person, Population};
pub use generator::ScheduleGenerator;
pub use observer::{GenerationObserver, NoopObserver};
pub use occupancy::{KindSummary, Occupancy, RoleCounts, Summary};
