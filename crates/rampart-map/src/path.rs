//! Enemy path: ordered waypoints through path cells.

use std::collections::HashSet;

use rampart_core::enums::CellState;
use rampart_core::types::{GridCoord, Position};

use crate::error::MapError;
use crate::grid::Grid;

/// Ordered path cells and their pixel-space centers. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    cells: Vec<GridCoord>,
    waypoints: Vec<Position>,
}

impl Path {
    /// Validate an explicit cell list against the grid.
    pub fn from_cells(grid: &Grid, cells: &[GridCoord]) -> Result<Self, MapError> {
        if cells.is_empty() {
            return Err(MapError::EmptyPath);
        }
        for &cell in cells {
            match grid.get(cell) {
                None => return Err(MapError::PathCellOutOfBounds { cell }),
                Some(CellState::Path) => {}
                Some(_) => return Err(MapError::PathCellNotOnPath { cell }),
            }
        }
        for pair in cells.windows(2) {
            if !pair[0].is_adjacent(&pair[1]) {
                return Err(MapError::BrokenPath {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        Ok(Self::new(cells.to_vec()))
    }

    /// Trace the path cells of a layout from one end to the other.
    ///
    /// The path cells must form a single unbranched chain. The walk starts
    /// at whichever end comes first in row-major order.
    pub fn derive(grid: &Grid) -> Result<Self, MapError> {
        let path_cells: HashSet<GridCoord> = grid.path_cells().collect();
        if path_cells.is_empty() {
            return Err(MapError::EmptyPath);
        }

        let on_path = |c: &GridCoord| path_cells.contains(c);
        let degree = |c: GridCoord| grid.neighbours(c).filter(on_path).count();

        if path_cells.iter().any(|&c| degree(c) > 2) {
            return Err(MapError::AmbiguousPath);
        }

        // Row-major order so the choice of start is stable.
        let start = grid
            .path_cells()
            .find(|&c| degree(c) <= 1)
            .ok_or(MapError::AmbiguousPath)?;

        let mut ordered = vec![start];
        let mut visited = HashSet::from([start]);
        let mut current = start;
        loop {
            let next = grid
                .neighbours(current)
                .find(|n| on_path(n) && !visited.contains(n));
            let Some(next) = next else { break };
            visited.insert(next);
            ordered.push(next);
            current = next;
        }

        if ordered.len() != path_cells.len() {
            return Err(MapError::AmbiguousPath);
        }
        Ok(Self::new(ordered))
    }

    fn new(cells: Vec<GridCoord>) -> Self {
        let waypoints = cells.iter().map(GridCoord::center).collect();
        Self { cells, waypoints }
    }

    pub fn cells(&self) -> &[GridCoord] {
        &self.cells
    }

    /// Waypoint at `index`, or None past the end.
    pub fn waypoint(&self, index: usize) -> Option<Position> {
        self.waypoints.get(index).copied()
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Grid {
        #[rustfmt::skip]
        let layout = vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 1, 0],
        ];
        Grid::from_layout(&layout).unwrap()
    }

    #[test]
    fn test_derive_walks_the_chain() {
        let path = Path::derive(&l_shape()).unwrap();
        let expected = [(1, 0), (1, 1), (1, 2), (2, 2), (3, 2)].map(|(r, c)| GridCoord::new(r, c));
        assert_eq!(path.cells(), &expected);
        assert_eq!(path.start(), Position::new(20.0, 60.0));
        assert_eq!(path.waypoint(4), Some(Position::new(100.0, 140.0)));
        assert_eq!(path.waypoint(5), None);
    }

    #[test]
    fn test_derive_rejects_branches() {
        #[rustfmt::skip]
        let layout = vec![
            vec![0, 1, 0],
            vec![1, 1, 1],
            vec![0, 0, 0],
        ];
        let grid = Grid::from_layout(&layout).unwrap();
        assert_eq!(Path::derive(&grid), Err(MapError::AmbiguousPath));
    }

    #[test]
    fn test_derive_rejects_disconnected_segments() {
        let grid = Grid::from_layout(&[vec![1, 1, 0, 1, 1]]).unwrap();
        assert_eq!(Path::derive(&grid), Err(MapError::AmbiguousPath));
    }

    #[test]
    fn test_derive_rejects_loops() {
        let grid = Grid::from_layout(&[vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(Path::derive(&grid), Err(MapError::AmbiguousPath));
    }

    #[test]
    fn test_derive_single_cell() {
        let grid = Grid::from_layout(&[vec![0, 1, 0]]).unwrap();
        let path = Path::derive(&grid).unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_derive_requires_path_cells() {
        let grid = Grid::from_layout(&[vec![0, 0]]).unwrap();
        assert_eq!(Path::derive(&grid), Err(MapError::EmptyPath));
    }

    #[test]
    fn test_explicit_path_validation() {
        let grid = l_shape();
        assert_eq!(Path::from_cells(&grid, &[]), Err(MapError::EmptyPath));

        let off = GridCoord::new(9, 9);
        assert_eq!(
            Path::from_cells(&grid, &[off]),
            Err(MapError::PathCellOutOfBounds { cell: off })
        );

        let ground = GridCoord::new(0, 0);
        assert_eq!(
            Path::from_cells(&grid, &[ground]),
            Err(MapError::PathCellNotOnPath { cell: ground })
        );

        let from = GridCoord::new(1, 0);
        let to = GridCoord::new(1, 2);
        assert_eq!(
            Path::from_cells(&grid, &[from, to]),
            Err(MapError::BrokenPath { from, to })
        );
    }

    #[test]
    fn test_explicit_path_may_be_partial() {
        let grid = l_shape();
        let cells = [GridCoord::new(1, 1), GridCoord::new(1, 2)];
        let path = Path::from_cells(&grid, &cells).unwrap();
        assert_eq!(path.len(), 2);
    }
}
