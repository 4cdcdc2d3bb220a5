//! Grid: the static map layout plus tower occupancy.

use rampart_core::enums::CellState;
use rampart_core::types::GridCoord;

use crate::error::MapError;

/// Row-major grid of cell states. The default grid has no cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a grid from numeric layout rows (0 = empty, 1 = path).
    /// Occupied cells are not allowed in a source layout.
    pub fn from_layout(layout: &[Vec<u8>]) -> Result<Self, MapError> {
        let rows = layout.len();
        let cols = layout.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MapError::EmptyLayout);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in layout.iter().enumerate() {
            if line.len() != cols {
                return Err(MapError::RaggedLayout {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &code) in line.iter().enumerate() {
                match CellState::from_code(code) {
                    Some(state @ (CellState::Empty | CellState::Path)) => cells.push(state),
                    _ => {
                        return Err(MapError::InvalidCell {
                            cell: GridCoord::new(row, col),
                            code,
                        })
                    }
                }
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    pub fn in_bounds(&self, cell: GridCoord) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline]
    fn idx(&self, cell: GridCoord) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Cell state, or None outside the grid.
    pub fn get(&self, cell: GridCoord) -> Option<CellState> {
        self.in_bounds(cell).then(|| self.cells[self.idx(cell)])
    }

    /// Mark an empty cell as holding a tower. Returns false (and changes
    /// nothing) unless the cell is in bounds and empty.
    pub fn occupy(&mut self, cell: GridCoord) -> bool {
        if self.get(cell) != Some(CellState::Empty) {
            return false;
        }
        let idx = self.idx(cell);
        self.cells[idx] = CellState::Occupied;
        true
    }

    /// Free an occupied cell. Path and empty cells are left untouched.
    pub fn vacate(&mut self, cell: GridCoord) -> bool {
        if self.get(cell) != Some(CellState::Occupied) {
            return false;
        }
        let idx = self.idx(cell);
        self.cells[idx] = CellState::Empty;
        true
    }

    /// Coordinates of every path cell, row-major.
    pub fn path_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Path)
            .map(|(i, _)| GridCoord::new(i / self.cols, i % self.cols))
    }

    /// In-bounds edge neighbours of a cell.
    pub fn neighbours(&self, cell: GridCoord) -> impl Iterator<Item = GridCoord> + '_ {
        let GridCoord { row, col } = cell;
        [
            row.checked_sub(1).map(|r| GridCoord::new(r, col)),
            Some(GridCoord::new(row + 1, col)),
            col.checked_sub(1).map(|c| GridCoord::new(row, c)),
            Some(GridCoord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |n| self.in_bounds(*n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<Vec<u8>> {
        vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 0, 0]]
    }

    #[test]
    fn test_from_layout_dimensions() {
        let grid = Grid::from_layout(&layout()).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(GridCoord::new(0, 1)), Some(CellState::Path));
        assert_eq!(grid.get(GridCoord::new(2, 2)), Some(CellState::Empty));
        assert_eq!(grid.get(GridCoord::new(3, 0)), None);
    }

    #[test]
    fn test_rejects_bad_layouts() {
        assert_eq!(Grid::from_layout(&[]), Err(MapError::EmptyLayout));
        assert_eq!(
            Grid::from_layout(&[vec![0, 1], vec![0]]),
            Err(MapError::RaggedLayout {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_layout(&[vec![0, 2]]),
            Err(MapError::InvalidCell {
                cell: GridCoord::new(0, 1),
                code: 2
            })
        );
    }

    #[test]
    fn test_occupy_and_vacate() {
        let mut grid = Grid::from_layout(&layout()).unwrap();
        let cell = GridCoord::new(0, 0);

        assert!(grid.occupy(cell));
        assert_eq!(grid.get(cell), Some(CellState::Occupied));
        assert!(!grid.occupy(cell), "cannot occupy twice");

        assert!(grid.vacate(cell));
        assert_eq!(grid.get(cell), Some(CellState::Empty));
        assert!(!grid.vacate(cell), "cannot vacate an empty cell");
    }

    #[test]
    fn test_path_cells_are_immutable() {
        let mut grid = Grid::from_layout(&layout()).unwrap();
        let path = GridCoord::new(1, 1);
        assert!(!grid.occupy(path));
        assert!(!grid.vacate(path));
        assert_eq!(grid.get(path), Some(CellState::Path));
    }

    #[test]
    fn test_neighbours_stay_in_bounds() {
        let grid = Grid::from_layout(&layout()).unwrap();
        let corner: Vec<_> = grid.neighbours(GridCoord::new(0, 0)).collect();
        assert_eq!(corner.len(), 2);
        let center: Vec<_> = grid.neighbours(GridCoord::new(1, 1)).collect();
        assert_eq!(center.len(), 4);
    }
}
