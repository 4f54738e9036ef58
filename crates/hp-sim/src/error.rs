use hp_behavior::BehaviorError;
use hp_core::{BuildingId, CoreError, FamilyId, PersonId};
use hp_schedule::ScheduleError;
use hp_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("unknown family {0}")]
    UnknownFamily(FamilyId),

    #[error("{family} has no home building")]
    MissingHome { family: FamilyId },

    #[error("{family}: home {building} is not a home")]
    NotAHome { family: FamilyId, building: BuildingId },

    #[error("{family}: {building} is not a daycare")]
    NotADaycare { family: FamilyId, building: BuildingId },

    #[error("{family} has dependent children but no adult to look after them")]
    NoCaregiver { family: FamilyId },

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("schedule builder failed for {person}: {source}")]
    Behavior {
        person: PersonId,
        #[source]
        source: BehaviorError,
    },

    #[error("generated schedule for {person} is invalid: {source}")]
    Schedule {
        person: PersonId,
        #[source]
        source: ScheduleError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
