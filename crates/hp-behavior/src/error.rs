use thiserror::Error;

use hp_core::BuildingId;
use hp_mobility::MobilityError;
use hp_schedule::ScheduleKind;
use hp_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("spatial lookup failed: {0}")]
    Spatial(#[from] SpatialError),

    #[error("move failed: {0}")]
    Mobility(#[from] MobilityError),

    #[error("{0} schedule needs the caregiver's finished schedule")]
    MissingCaregiver(ScheduleKind),

    #[error("building {0} is assigned as a school but has no timetable")]
    NotASchool(BuildingId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
