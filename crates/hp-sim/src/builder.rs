//! Fluent builder for constructing a [`ScheduleGenerator`].

use hp_core::{BuildingId, FamilyId, SimRng, SimulationConfig};
use hp_mobility::TransportModel;
use hp_spatial::{BuildingKind, SpatialIndex};

use crate::{Population, ScheduleGenerator, SimError, SimResult};

/// Fluent builder for [`ScheduleGenerator`].
///
/// # Required inputs
///
/// - [`SimulationConfig`]: seed, transport model, radius limits, activity weights
/// - [`SpatialIndex`]: the grid with every building and its capacities
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default              |
/// |--------------------|----------------------|
/// | `.population(p)`   | `Population::new()`  |
///
/// `build` checks every precondition of generation up front: the config is
/// valid, each family's home is a home building, a pre-assigned daycare is
/// a daycare, and a family with dependent children has an adult.  Nothing
/// that passes these checks can fail mid-run except through a bug.
///
/// # Example
///
/// ```rust,ignore
/// let mut generator = GeneratorBuilder::new(config, index)
///     .population(population)
///     .build()?;
/// generator.run(&mut NoopObserver)?;
/// ```
pub struct GeneratorBuilder {
    config:     SimulationConfig,
    index:      SpatialIndex,
    population: Option<Population>,
}

impl GeneratorBuilder {
    pub fn new(config: SimulationConfig, index: SpatialIndex) -> Self {
        Self { config, index, population: None }
    }

    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate inputs and return a generator positioned at the first family.
    pub fn build(self) -> SimResult<ScheduleGenerator> {
        self.config.validate()?;
        let population = self.population.unwrap_or_default();

        // ── Validate families ─────────────────────────────────────────────
        for family in population.families() {
            if !family.home.is_valid() {
                return Err(SimError::MissingHome { family: family.id });
            }
            let home = self.index.building(family.home)?;
            if !matches!(home.kind, BuildingKind::Home) {
                return Err(SimError::NotAHome { family: family.id, building: family.home });
            }
            if let Some(daycare) = family.daycare {
                check_daycare(&self.index, family.id, daycare)?;
            }
            if family.has_dependents() && family.caregiver().is_none() {
                return Err(SimError::NoCaregiver { family: family.id });
            }
        }

        Ok(ScheduleGenerator {
            transport:   TransportModel::new(&self.config.transport),
            rng:         SimRng::new(self.config.seed),
            config:      self.config,
            index:       self.index,
            population,
            next_family: 0,
        })
    }
}

fn check_daycare(index: &SpatialIndex, family: FamilyId, daycare: BuildingId) -> SimResult<()> {
    if index.building(daycare)?.is_daycare() {
        Ok(())
    } else {
        Err(SimError::NotADaycare { family, building: daycare })
    }
}
