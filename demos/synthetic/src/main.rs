//! synthetic — generate one week of schedules for a synthetic town.
//!
//! ```text
//! cargo run --release -p synthetic -- [config.json] [output-dir]
//! ```
//!
//! Without a config file the defaults are used.  Output goes to `./output`:
//! `schedules.csv` and `people.csv`.

mod world;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use hp_core::{SimRng, SimulationConfig};
use hp_output::{CsvScheduleWriter, ScheduleWriterObserver};
use hp_sim::GeneratorBuilder;

use world::{build_population, build_town};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE: u32   = 30;
const FAMILIES:  usize = 2_000;
/// Offset of the world-building RNG stream from the generation stream.
const WORLD_STREAM: u64 = 1;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::from_json_path(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => SimulationConfig { progress_interval: 250, ..SimulationConfig::default() },
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "output".to_owned()));

    println!("=== synthetic — weekly schedule synthesizer ===");
    println!("Grid: {GRID_SIZE}×{GRID_SIZE}  |  Families: {FAMILIES}  |  Seed: {}", config.seed);
    println!();

    // 1. Town and population, from their own RNG stream.
    let mut world_rng = SimRng::new(config.seed).child(WORLD_STREAM);
    let (index, homes) = build_town(GRID_SIZE, &mut world_rng)?;
    let population = build_population(&homes, FAMILIES, &mut world_rng)?;
    info!(
        "town: {} buildings, {} homes; population: {} people in {} families",
        index.building_count(),
        homes.len(),
        population.person_count(),
        population.family_count(),
    );

    // 2. Generate, streaming each family to CSV.
    let writer = CsvScheduleWriter::new(&out_dir)
        .with_context(|| format!("creating output in {}", out_dir.display()))?;
    let mut observer = ScheduleWriterObserver::new(writer);
    let mut generator = GeneratorBuilder::new(config, index).population(population).build()?;

    let started = Instant::now();
    generator.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing schedules");
    }
    let elapsed = started.elapsed();

    // 3. Report.
    let population = &generator.population;
    println!();
    println!("Generated {} schedules in {elapsed:.2?}", population.person_count());
    println!("Average units per person and week:");
    print!("{}", population.summary());

    let noon_monday = 72;
    let occupancy = population.occupancy_at(noon_monday);
    println!("Occupied buildings at Monday 12:00: {}", occupancy.len());
    println!("Output written to {}", out_dir.display());
    Ok(())
}
