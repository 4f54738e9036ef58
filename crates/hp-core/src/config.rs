//! Run configuration.
//!
//! `SimulationConfig` replaces the process-wide option map of older
//! generators: it is built once (from defaults or a JSON file) and passed by
//! reference into the generator.  Every field has a default, so a JSON file
//! only needs to list what it overrides:
//!
//! ```json
//! { "seed": 7, "transport": { "rates": { "public": 2, "private": 4, "walk": 1 } } }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── Activity probabilities ────────────────────────────────────────────────────

/// Relative weights of the three free-choice activities.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityWeights {
    pub home: f64,
    pub job:  f64,
    pub out:  f64,
}

impl ActivityWeights {
    pub const fn new(home: f64, job: f64, out: f64) -> Self {
        Self { home, job, out }
    }

    /// Weights in draw order `[home, job, out]`.
    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.home, self.job, self.out]
    }

    fn validate(&self, what: &str) -> CoreResult<()> {
        validate_weights(&self.as_array(), what)
    }
}

/// Free-choice weights per role and day type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityProbabilities {
    pub older_school_day:     ActivityWeights,
    pub older_school_weekend: ActivityWeights,
    /// Employed adult with job quota left for the day.
    pub adult_work:           ActivityWeights,
    /// Employed adult whose quota for the day is used up.
    pub adult_no_work:        ActivityWeights,
    pub adult_unemployed:     ActivityWeights,
}

impl Default for ActivityProbabilities {
    fn default() -> Self {
        Self {
            older_school_day:     ActivityWeights::new(0.8, 0.0, 0.2),
            older_school_weekend: ActivityWeights::new(0.8, 0.0, 0.2),
            adult_work:           ActivityWeights::new(0.05, 0.90, 0.05),
            adult_no_work:        ActivityWeights::new(0.5, 0.0, 0.5),
            adult_unemployed:     ActivityWeights::new(0.5, 0.0, 0.5),
        }
    }
}

// ── Transport ─────────────────────────────────────────────────────────────────

/// Per-mode values in `[public, private, walk]` order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeTable<T> {
    pub public:  T,
    pub private: T,
    pub walk:    T,
}

/// Parameters of the transportation model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Relative weights of choosing each mode before feasibility checks.
    pub probabilities: ModeTable<f64>,
    /// Grid cells covered per time unit.
    pub rates:         ModeTable<u32>,
    /// Beyond this Chebyshev distance public transport is unavailable.
    pub public_radius: u32,
    /// Beyond this Chebyshev distance walking is unavailable.
    pub walk_radius:   u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            probabilities: ModeTable { public: 0.2, private: 0.7, walk: 0.1 },
            rates:         ModeTable { public: 2, private: 3, walk: 1 },
            public_radius: 30,
            walk_radius:   3,
        }
    }
}

// ── Radius limits ─────────────────────────────────────────────────────────────

/// Maximum search radius (in cells) per person category.  `None` means the
/// search may cover the whole grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusLimits {
    pub young_child:                 Option<u32>,
    pub young_school_child:          Option<u32>,
    pub older_school_child_under_16: Option<u32>,
    pub older_school_child_16_plus:  Option<u32>,
    pub employed_adult:              Option<u32>,
    pub unemployed_adult:            Option<u32>,
}

impl Default for RadiusLimits {
    fn default() -> Self {
        Self {
            young_child:                 Some(10),
            young_school_child:          Some(20),
            older_school_child_under_16: Some(30),
            older_school_child_16_plus:  Some(40),
            employed_adult:              None,
            unemployed_adult:            Some(20),
        }
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Top-level configuration of one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Master RNG seed.  The same seed always produces identical schedules.
    pub seed: u64,

    /// Log progress every N families.  0 disables progress lines.
    pub progress_interval: usize,

    pub transport:     TransportConfig,
    pub radius_limits: RadiusLimits,
    pub activity:      ActivityProbabilities,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed:              42,
            progress_interval: 10_000,
            transport:         TransportConfig::default(),
            radius_limits:     RadiusLimits::default(),
            activity:          ActivityProbabilities::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: SimulationConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json_reader`][Self::from_json_reader] but opens `path`.
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Reject values that would make a draw or a travel-time division
    /// meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        let t = &self.transport;
        validate_weights(&[t.probabilities.public, t.probabilities.private, t.probabilities.walk], "transport probabilities")?;
        if t.rates.public == 0 || t.rates.private == 0 || t.rates.walk == 0 {
            return Err(CoreError::Config("transport rates must be positive".into()));
        }

        let a = &self.activity;
        a.older_school_day.validate("older_school_day")?;
        a.older_school_weekend.validate("older_school_weekend")?;
        a.adult_work.validate("adult_work")?;
        a.adult_no_work.validate("adult_no_work")?;
        a.adult_unemployed.validate("adult_unemployed")?;
        Ok(())
    }
}

fn validate_weights(weights: &[f64], what: &str) -> CoreResult<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(CoreError::Config(format!("{what}: weights must be finite and non-negative")));
    }
    if weights.iter().all(|w| *w == 0.0) {
        return Err(CoreError::Config(format!("{what}: at least one weight must be positive")));
    }
    Ok(())
}
