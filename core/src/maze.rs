//! Grid of wall and path cells that makes up a level.

use serde::{Deserialize, Serialize};

use crate::{CellCoord, START_CELL};

/// Contents of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Traversable cell.
    Path,
}

/// Dense rectangular grid of cells addressed by column and row.
///
/// Coordinates outside the grid read as [`Cell::Wall`], so collision tests can
/// probe freely without bounds checks of their own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    columns: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl Maze {
    /// Creates a maze of the provided size with every cell set to `fill`.
    #[must_use]
    pub fn filled(columns: u32, rows: u32, fill: Cell) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![fill; capacity],
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell where every level starts.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        START_CELL
    }

    /// Cell the player has to reach, one step inside the bottom-right corner.
    #[must_use]
    pub const fn goal(&self) -> CellCoord {
        CellCoord::new(
            self.columns.saturating_sub(2),
            self.rows.saturating_sub(2),
        )
    }

    /// Reports whether the coordinate lies within the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Returns the contents of the provided cell, treating the outside as wall.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Cell {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(Cell::Wall)
    }

    /// Returns the contents at signed coordinates, treating the outside as wall.
    #[must_use]
    pub fn cell_at(&self, column: i64, row: i64) -> Cell {
        match (u32::try_from(column), u32::try_from(row)) {
            (Ok(column), Ok(row)) => self.cell(CellCoord::new(column, row)),
            _ => Cell::Wall,
        }
    }

    /// Reports whether the provided cell is traversable.
    #[must_use]
    pub fn is_path(&self, cell: CellCoord) -> bool {
        self.cell(cell) == Cell::Path
    }

    /// Overwrites a cell. Coordinates outside the grid are ignored.
    pub fn set(&mut self, cell: CellCoord, value: Cell) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = value;
            }
        }
    }

    /// Iterates over every path cell in row-major order.
    pub fn path_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Path)
            .filter_map(move |(index, _)| {
                let index = u32::try_from(index).ok()?;
                Some(CellCoord::new(index % columns, index / columns))
            })
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
