//! The `ScheduleGenerator` and its family loop.

use std::time::Instant;

use log::info;

use hp_behavior::BuildContext;
use hp_core::{SimRng, SimulationConfig};
use hp_mobility::TransportModel;
use hp_spatial::SpatialIndex;

use crate::{FamilyCoordinator, GenerationObserver, Population, SimResult};

/// Drives schedule generation over a whole population.
///
/// Families are processed strictly in population order, one at a time: they
/// compete for the same job, school, daycare and visitor capacity, and all
/// draws come from a single RNG, so the order is part of what makes a run
/// reproducible from its seed.
///
/// Create via [`GeneratorBuilder`][crate::GeneratorBuilder].
pub struct ScheduleGenerator {
    pub config: SimulationConfig,

    /// Grid and capacity ledger.  Reservations made during generation stay
    /// recorded here.
    pub index: SpatialIndex,

    pub transport: TransportModel,

    pub population: Population,

    /// The single generator every builder draws from.
    pub rng: SimRng,

    pub(crate) next_family: usize,
}

impl ScheduleGenerator {
    // ── Public API ────────────────────────────────────────────────────────

    /// Generate every remaining family.
    pub fn run<O: GenerationObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "generating weekly schedules for {} people in {} families (seed {})",
            self.population.person_count(),
            self.population.family_count(),
            self.config.seed,
        );
        let started = Instant::now();

        while !self.is_finished() {
            self.generate_next(observer)?;
        }

        info!(
            "generated {} schedules in {:.2?}",
            self.population.person_count(),
            started.elapsed(),
        );
        observer.on_finish(&self.population);
        Ok(())
    }

    /// Generate at most `n` more families.  Returns how many were generated.
    ///
    /// Useful for tests and incremental stepping; `on_finish` is not called.
    pub fn run_families<O: GenerationObserver>(&mut self, n: usize, observer: &mut O) -> SimResult<usize> {
        let mut done = 0;
        while done < n && !self.is_finished() {
            self.generate_next(observer)?;
            done += 1;
        }
        Ok(done)
    }

    pub fn is_finished(&self) -> bool {
        self.next_family >= self.population.family_count()
    }

    /// Families generated so far.
    pub fn families_done(&self) -> usize {
        self.next_family
    }

    /// Hand back the population and the ledger with its reservations.
    pub fn into_parts(self) -> (Population, SpatialIndex) {
        (self.population, self.index)
    }

    // ── Family processing ─────────────────────────────────────────────────

    fn generate_next<O: GenerationObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let family = &mut self.population.families_mut()[self.next_family];
        let mut ctx = BuildContext::new(&mut self.index, &self.transport, &self.config, &mut self.rng);
        FamilyCoordinator::generate(family, &mut ctx)?;
        observer.on_family_done(family);

        self.next_family += 1;
        let (done, total) = (self.next_family, self.population.family_count());
        let interval = self.config.progress_interval;
        if interval > 0 && done.is_multiple_of(interval) {
            info!("{done}/{total} families ({:.1}%)", 100.0 * done as f64 / total as f64);
            observer.on_progress(done, total);
        }
        Ok(())
    }
}
