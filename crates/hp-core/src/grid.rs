//! Grid coordinates of the spatial resource index.

use std::fmt;

/// A `(row, col)` cell of the population grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance `max(|Δrow|, |Δcol|)`, the metric used for all
    /// travel-time arithmetic.
    #[inline]
    pub fn chebyshev(self, other: CellPos) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// One grid step from `self` toward `target`, moving along both axes when
    /// both still differ.  Returns `self` when already there.
    #[inline]
    pub fn step_toward(self, target: CellPos) -> CellPos {
        fn step(from: u32, to: u32) -> u32 {
            match from.cmp(&to) {
                std::cmp::Ordering::Less    => from + 1,
                std::cmp::Ordering::Greater => from - 1,
                std::cmp::Ordering::Equal   => from,
            }
        }
        CellPos::new(step(self.row, target.row), step(self.col, target.col))
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Units needed to cover `distance` cells at `rate` cells per unit, rounded
/// up so a traveller is never early.  A zero rate is treated as 1.
#[inline]
pub fn travel_units(distance: u32, rate: u32) -> u32 {
    distance.div_ceil(rate.max(1))
}
