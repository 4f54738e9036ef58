//! Spatial-subsystem error type.

use thiserror::Error;

use hp_core::{BuildingId, CellPos, Role};

/// Errors produced by `hp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("building {0} not found in spatial index")]
    UnknownBuilding(BuildingId),

    #[error("building {building} at {cell} lies outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        building: BuildingId,
        cell:     CellPos,
        rows:     u32,
        cols:     u32,
    },

    #[error("building {building} has no {role} capacity left for this reservation")]
    CapacityExceeded { building: BuildingId, role: Role },

    #[error("spatial index needs at least one row and one column")]
    EmptyGrid,
}

pub type SpatialResult<T> = Result<T, SpatialError>;
