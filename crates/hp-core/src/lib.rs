//! `hp-core` — foundational types for the haplos weekly schedule synthesizer.
//!
//! Every other `hp-*` crate depends on this one.  It has no `hp-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PersonId`, `FamilyId`, `BuildingId`                    |
//! | [`grid`]      | `CellPos`, Chebyshev distance                           |
//! | [`time`]      | `TimeUnit`, `DAY_LENGTH`, `WEEK_LENGTH`, `WeekTime`     |
//! | [`role`]      | `Role` (occupancy tag of a time slot)                   |
//! | [`transport`] | `TransportMode` (public / private / walk)               |
//! | [`rng`]       | `SimRng`, the single generator threaded through a run   |
//! | [`config`]    | `SimulationConfig` and its sub-tables                   |
//! | [`error`]     | `CoreError`, `CoreResult`                               |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod role;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    ActivityProbabilities, ActivityWeights, ModeTable, RadiusLimits, SimulationConfig,
    TransportConfig,
};
pub use error::{CoreError, CoreResult};
pub use grid::{CellPos, travel_units};
pub use ids::{BuildingId, FamilyId, PersonId};
pub use rng::SimRng;
pub use role::Role;
pub use time::{DAY_LENGTH, DAYS_PER_WEEK, SCHOOL_DAYS, TimeUnit, UNITS_PER_HOUR, WEEK_LENGTH, WeekTime};
pub use transport::TransportMode;
