//! Bounded expanding-ring search for an admissible building.
//!
//! The origin cell is checked first, then square rings of Chebyshev radius
//! `r = 1, 2, …` around it.  Each ring's boundary is clipped to the grid.
//! Within a ring, cells are visited top edge, bottom edge, left edge, right
//! edge; only ring distance is meaningful to callers.
//!
//! The search stops at the first hit, or when
//!
//! - every ring that intersects the grid has been scanned,
//! - the ring radius exceeds `radius_limit`, or
//! - reaching the ring at `rate` cells per unit would arrive after the
//!   admission window closes.
//!
//! A miss is not an error; callers fall back to a location they already know.

use hp_core::{BuildingId, CellPos, TimeUnit, travel_units};

use crate::{Admission, SpatialIndex};

/// Parameters of one search.
#[derive(Copy, Clone, Debug)]
pub struct SearchRequest {
    pub origin:       CellPos,
    pub admission:    Admission,
    /// Largest ring radius to scan; `None` scans the whole grid.
    pub radius_limit: Option<u32>,
    /// Cells per time unit used for the arrival-time bound.
    pub rate:         u32,
}

impl SearchRequest {
    pub fn new(origin: CellPos, admission: Admission) -> Self {
        Self { origin, admission, radius_limit: None, rate: 1 }
    }

    pub fn radius(mut self, limit: Option<u32>) -> Self {
        self.radius_limit = limit;
        self
    }

    pub fn rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    fn arrival_too_late(&self, r: u32) -> bool {
        let arrival: TimeUnit = self.admission.start + travel_units(r, self.rate);
        arrival > self.admission.end
    }
}

impl SpatialIndex {
    /// Find the nearest (by ring) building that admits `req.admission`.
    pub fn find_available_building(&self, req: &SearchRequest) -> Option<BuildingId> {
        if !self.contains(req.origin) {
            return None;
        }
        if let Some(id) = self.first_admissible(req.origin, &req.admission) {
            return Some(id);
        }

        let max_ring = self.max_ring(req.origin);
        for r in 1..=max_ring {
            if req.radius_limit.is_some_and(|limit| r > limit) || req.arrival_too_late(r) {
                break;
            }
            let hit = ring_cells(req.origin, r, self.rows(), self.cols())
                .find_map(|cell| self.first_admissible(cell, &req.admission));
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    /// Largest ring radius around `origin` that still touches the grid.
    fn max_ring(&self, origin: CellPos) -> u32 {
        let down  = self.rows() - 1 - origin.row;
        let right = self.cols() - 1 - origin.col;
        origin.row.max(down).max(origin.col).max(right)
    }
}

/// Boundary cells of the ring of radius `r > 0` around `origin`, clipped to
/// a `rows × cols` grid.  Each cell is yielded once.
pub fn ring_cells(origin: CellPos, r: u32, rows: u32, cols: u32) -> impl Iterator<Item = CellPos> {
    let (r, row, col) = (r as i64, origin.row as i64, origin.col as i64);
    let in_grid = move |(y, x): (i64, i64)| {
        (y >= 0 && x >= 0 && y < rows as i64 && x < cols as i64).then(|| CellPos::new(y as u32, x as u32))
    };

    let top    = (col - r..=col + r).map(move |x| (row - r, x));
    let bottom = (col - r..=col + r).map(move |x| (row + r, x));
    let left   = (row - r + 1..=row + r - 1).map(move |y| (y, col - r));
    let right  = (row - r + 1..=row + r - 1).map(move |y| (y, col + r));

    top.chain(bottom).chain(left).chain(right).filter_map(in_grid)
}
