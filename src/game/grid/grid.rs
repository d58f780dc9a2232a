//! Fixed-size square grid of cells.
//!
//! The grid only stores state; every lookup is bounds-checked and
//! out-of-range coordinates yield `None` rather than panicking.

use serde::{Serialize, Deserialize};

use crate::game::types::{Cell, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

/// Build a `size` x `size` matrix of unowned cells.
pub fn generate_grid(size: usize) -> Vec<Vec<Cell>> {
    vec![vec![Cell::default(); size]; size]
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { cells: generate_grid(size) }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.y < self.size() && pos.x < self.size()
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x))
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.cells.get_mut(pos.y).and_then(|row| row.get_mut(pos.x))
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, cell)| (Position { x, y }, cell))
        })
    }

    /// Reset every cell to unowned, level 0, no resource. The size never changes.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Player;

    #[test]
    fn test_grid_generation_size() {
        let grid = Grid::new(10);
        assert_eq!(grid.size(), 10);
        assert!(grid.rows().all(|row| row.len() == 10));
        assert!(grid.iter().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_out_of_bounds_lookup_is_none() {
        let mut grid = Grid::new(4);
        assert!(grid.get(Position::new(4, 0)).is_none());
        assert!(grid.get(Position::new(0, 4)).is_none());
        assert!(grid.get_mut(Position::new(7, 7)).is_none());
        assert!(!grid.contains(Position::new(4, 3)));
        assert!(grid.contains(Position::new(3, 3)));
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::new(2);
        let order: Vec<Position> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(
            order,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut grid = Grid::new(3);
        if let Some(cell) = grid.get_mut(Position::new(1, 2)) {
            cell.owner = Some(Player::Opponent);
            cell.level = 4;
            cell.resource = true;
        }
        grid.reset();
        assert_eq!(grid, Grid::new(3));
    }
}
