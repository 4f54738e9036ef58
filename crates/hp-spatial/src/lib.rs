//! `hp-spatial` — buildings, the capacity ledger, and the grid index.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`building`] | `Building`, `BuildingKind`, `Capacity`, `VisitorLedger`, `School`, `Admission` |
//! | [`index`]    | `SpatialIndex` (cell grid + building arena), `SpatialIndexBuilder` |
//! | [`search`]   | `SearchRequest`, `find_available_building`, `ring_cells`     |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                           |
//!
//! All building references elsewhere in the workspace are `BuildingId`
//! indices into the arena owned by [`SpatialIndex`]; capacity reservations go
//! through [`SpatialIndex::reserve`].

pub mod building;
pub mod error;
pub mod index;
pub mod search;

#[cfg(test)]
mod tests;

pub use building::{Admission, Building, BuildingKind, Capacity, GradeBand, School, VisitorLedger};
pub use error::{SpatialError, SpatialResult};
pub use index::{Cell, SpatialIndex, SpatialIndexBuilder};
pub use search::{SearchRequest, ring_cells};
