//! Transportation model: mode choice and travel time.
//!
//! # Mode choice
//!
//! Starting from the configured `[public, private, walk]` weights:
//!
//! ```text
//! distance > public_radius              → Private (no draw)
//! distance > walk_radius                → walk weight folded into public
//! time(distance, public rate) > limit   → Private (no draw)
//! time(distance, walk rate)   > limit   → walk weight folded into public
//! otherwise                             → weighted draw
//! ```
//!
//! Private transport has no radius and no capacity, so it is always a valid
//! fallback.  An unknown distance skips every check and goes straight to the
//! draw.

use hp_core::{CellPos, SimRng, TimeUnit, TransportConfig, TransportMode, travel_units};

/// The outcome of a mode choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransportChoice {
    pub mode:        TransportMode,
    /// Cells per time unit for `mode`.
    pub rate:        u32,
    /// Units needed for the distance the choice was made for.
    pub travel_time: TimeUnit,
}

/// Mode weights, rates, and radius limits of one run.
#[derive(Clone, Debug)]
pub struct TransportModel {
    weights:       [f64; 3],
    rates:         [u32; 3],
    public_radius: u32,
    walk_radius:   u32,
}

const PUBLIC:  usize = 0;
const PRIVATE: usize = 1;
const WALK:    usize = 2;

impl TransportModel {
    pub fn new(config: &TransportConfig) -> Self {
        let p = &config.probabilities;
        let r = &config.rates;
        Self {
            weights:       [p.public, p.private, p.walk],
            rates:         [r.public.max(1), r.private.max(1), r.walk.max(1)],
            public_radius: config.public_radius,
            walk_radius:   config.walk_radius,
        }
    }

    /// Cells per time unit for `mode`.
    #[inline]
    pub fn rate(&self, mode: TransportMode) -> u32 {
        self.rates[slot(mode)]
    }

    /// Units needed to travel between two cells in `mode`.
    #[inline]
    pub fn travel_time(&self, from: CellPos, to: CellPos, mode: TransportMode) -> TimeUnit {
        travel_units(from.chebyshev(to), self.rate(mode))
    }

    /// Pick a mode for a trip of `distance` cells that must take at most
    /// `time_limit` units.  `None` leaves the respective bound unconstrained.
    pub fn choose(&self, distance: Option<u32>, time_limit: Option<TimeUnit>, rng: &mut SimRng) -> TransportChoice {
        let mut weights = self.weights;

        if let Some(d) = distance {
            if d > self.public_radius {
                return self.choice(TransportMode::Private, distance);
            }
            if d > self.walk_radius {
                fold_walk(&mut weights);
            }
            if let Some(limit) = time_limit {
                if travel_units(d, self.rates[PUBLIC]) > limit {
                    return self.choice(TransportMode::Private, distance);
                }
                if travel_units(d, self.rates[WALK]) > limit {
                    fold_walk(&mut weights);
                }
            }
        }

        let mode = match rng.weighted(&weights) {
            Some(PUBLIC) => TransportMode::Public,
            Some(WALK)   => TransportMode::Walk,
            _            => TransportMode::Private,
        };
        self.choice(mode, distance)
    }

    fn choice(&self, mode: TransportMode, distance: Option<u32>) -> TransportChoice {
        let rate = self.rate(mode);
        TransportChoice {
            mode,
            rate,
            travel_time: distance.map_or(0, |d| travel_units(d, rate)),
        }
    }
}

impl Default for TransportModel {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

#[inline]
fn slot(mode: TransportMode) -> usize {
    match mode {
        TransportMode::Public  => PUBLIC,
        TransportMode::Private => PRIVATE,
        TransportMode::Walk    => WALK,
    }
}

fn fold_walk(weights: &mut [f64; 3]) {
    weights[PUBLIC] += weights[WALK];
    weights[WALK] = 0.0;
}
