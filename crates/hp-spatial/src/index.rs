//! The spatial resource index: a grid of cells over a building arena.
//!
//! # Data layout
//!
//! Buildings are stored in one `Vec<Building>` indexed by `BuildingId`.
//! Cells are stored row-major in a `Vec<Cell>`; each cell lists the ids of
//! the buildings it contains and, optionally, the id of its transit hub
//! (itself a building of kind `TransportHub`).
//!
//! ```text
//! cell(row, col) = cells[row * cols + col]
//! ```
//!
//! Do not construct directly; use [`SpatialIndexBuilder`].

use hp_core::{BuildingId, CellPos};

use crate::{Admission, Building, BuildingKind, SpatialError, SpatialResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid cell.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// Non-hub buildings in this cell, in insertion order.
    pub buildings: Vec<BuildingId>,
    /// Transit hub used for slots emitted while passing through the cell.
    pub hub:       Option<BuildingId>,
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

pub struct SpatialIndex {
    rows:      u32,
    cols:      u32,
    cells:     Vec<Cell>,
    buildings: Vec<Building>,
}

impl SpatialIndex {
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    #[inline]
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// The cell at `pos`, or `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, pos: CellPos) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(cell_offset(pos, self.cols))
    }

    /// Transit hub of the cell at `pos`, if it has one.
    #[inline]
    pub fn hub_at(&self, pos: CellPos) -> Option<BuildingId> {
        self.cell_at(pos).and_then(|c| c.hub)
    }

    pub fn building(&self, id: BuildingId) -> SpatialResult<&Building> {
        self.buildings.get(id.index()).ok_or(SpatialError::UnknownBuilding(id))
    }

    /// Grid cell of building `id`.
    pub fn location(&self, id: BuildingId) -> SpatialResult<CellPos> {
        self.building(id).map(|b| b.cell)
    }

    /// `true` if building `id` exists and can take `req` right now.
    pub fn admits(&self, id: BuildingId, req: &Admission) -> bool {
        self.buildings.get(id.index()).is_some_and(|b| b.admits(req))
    }

    /// Record an occupancy reservation against building `id`.
    ///
    /// Fails without mutating anything if the reservation would exceed a
    /// declared maximum.
    pub fn reserve(&mut self, id: BuildingId, req: &Admission) -> SpatialResult<()> {
        let building = self
            .buildings
            .get_mut(id.index())
            .ok_or(SpatialError::UnknownBuilding(id))?;
        if !building.admits(req) {
            return Err(SpatialError::CapacityExceeded { building: id, role: req.role });
        }
        building.commit(req);
        Ok(())
    }

    /// First building in the cell at `pos` that admits `req`.
    pub(crate) fn first_admissible(&self, pos: CellPos, req: &Admission) -> Option<BuildingId> {
        self.cell_at(pos)?
            .buildings
            .iter()
            .copied()
            .find(|id| self.buildings[id.index()].admits(req))
    }
}

/// Row-major position of `pos` in the cell vector.
#[inline]
pub(crate) fn cell_offset(pos: CellPos, cols: u32) -> usize {
    pos.row as usize * cols as usize + pos.col as usize
}

// ── SpatialIndexBuilder ───────────────────────────────────────────────────────

/// Incrementally assembles a [`SpatialIndex`].
///
/// ```rust,ignore
/// let mut b = SpatialIndexBuilder::new(10, 10);
/// let home = b.add_building(CellPos::new(2, 3), BuildingKind::Home, 0);
/// let shop = b.add_building(CellPos::new(4, 4), BuildingKind::business(20), 40);
/// b.add_transport_hub(CellPos::new(3, 3));
/// let index = b.build()?;
/// ```
pub struct SpatialIndexBuilder {
    rows:      u32,
    cols:      u32,
    buildings: Vec<Building>,
}

impl SpatialIndexBuilder {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols, buildings: Vec::new() }
    }

    /// Add a building and return its id.  Cell bounds are checked in
    /// [`build`][Self::build].
    pub fn add_building(&mut self, cell: CellPos, kind: BuildingKind, max_visitors: u32) -> BuildingId {
        let id = BuildingId(self.buildings.len() as u32);
        self.buildings.push(Building::new(id, cell, kind, max_visitors));
        id
    }

    /// Add the transit hub for `cell`.  A later hub in the same cell replaces
    /// the earlier one.
    pub fn add_transport_hub(&mut self, cell: CellPos) -> BuildingId {
        self.add_building(cell, BuildingKind::TransportHub, 0)
    }

    /// Add a transit hub to every cell of the grid.
    pub fn add_hub_everywhere(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.add_transport_hub(CellPos::new(row, col));
            }
        }
    }

    pub fn build(self) -> SpatialResult<SpatialIndex> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SpatialError::EmptyGrid);
        }
        let mut cells = vec![Cell::default(); self.rows as usize * self.cols as usize];
        for b in &self.buildings {
            if b.cell.row >= self.rows || b.cell.col >= self.cols {
                return Err(SpatialError::CellOutOfBounds {
                    building: b.id,
                    cell:     b.cell,
                    rows:     self.rows,
                    cols:     self.cols,
                });
            }
            let cell = &mut cells[cell_offset(b.cell, self.cols)];
            match b.kind {
                BuildingKind::TransportHub => cell.hub = Some(b.id),
                _ => cell.buildings.push(b.id),
            }
        }
        Ok(SpatialIndex {
            rows: self.rows,
            cols: self.cols,
            cells,
            buildings: self.buildings,
        })
    }
}
