//! Sparse occupancy index kept in lockstep with the terrain entities.

use std::collections::HashMap;

use treasure_hunt_core::{AdventurerId, CellCoord};

/// Blocking entity standing on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Occupant {
    /// Impassable terrain feature.
    Mountain,
    /// Adventurer currently standing on the cell.
    Adventurer(AdventurerId),
}

/// Answers "who blocks this cell" in constant time.
///
/// Only blocked cells are stored, so memory follows the entity count rather
/// than the grid area. Treasures never block movement and are not indexed.
#[derive(Clone, Debug)]
pub(crate) struct OccupancyIndex {
    columns: u32,
    rows: u32,
    cells: HashMap<CellCoord, Occupant>,
}

impl OccupancyIndex {
    pub(crate) fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            cells: HashMap::new(),
        }
    }

    pub(crate) fn occupant(&self, cell: CellCoord) -> Option<Occupant> {
        self.cells.get(&cell).copied()
    }

    pub(crate) fn occupy(&mut self, cell: CellCoord, occupant: Occupant) {
        if cell.is_within(self.columns, self.rows) {
            let _ = self.cells.insert(cell, occupant);
        }
    }

    pub(crate) fn vacate(&mut self, cell: CellCoord) {
        let _ = self.cells.remove(&cell);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}
