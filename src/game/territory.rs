//! Territory queries.
//!
//! Pure reads over the grid: which cells a player holds and which empty
//! cells border them.

use crate::game::grid::Grid;
use crate::game::types::{Player, Position};

/// Orthogonal offsets checked around each owned cell: right, left, down, up.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Every coordinate owned by `player`, in row-major order.
pub fn owned_cells(grid: &Grid, player: Player) -> Vec<Position> {
    grid.iter()
        .filter_map(|(pos, cell)| cell.is_owned_by(player).then_some(pos))
        .collect()
}

/// In-bounds, unowned orthogonal neighbours of each coordinate in `coords`.
///
/// Duplicates are kept: an empty cell touching several owned cells appears once
/// per owned neighbour, which weights random expansion toward it.
pub fn empty_neighbors(grid: &Grid, coords: &[Position]) -> Vec<Position> {
    coords
        .iter()
        .flat_map(|pos| NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| offset(*pos, dx, dy)))
        .filter(|pos| grid.get(*pos).is_some_and(|cell| cell.is_empty()))
        .collect()
}

/// Expansion candidates for `player`: `empty_neighbors(owned_cells(player))`.
pub fn expansion_candidates(grid: &Grid, player: Player) -> Vec<Position> {
    empty_neighbors(grid, &owned_cells(grid, player))
}

fn offset(pos: Position, dx: isize, dy: isize) -> Option<Position> {
    Some(Position {
        x: pos.x.checked_add_signed(dx)?,
        y: pos.y.checked_add_signed(dy)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(grid: &mut Grid, x: usize, y: usize, player: Player) {
        if let Some(cell) = grid.get_mut(Position::new(x, y)) {
            cell.owner = Some(player);
            cell.level = 1;
        }
    }

    #[test]
    fn test_owned_cells_empty_for_unowned_player() {
        let mut grid = Grid::new(4);
        claim(&mut grid, 2, 2, Player::Human);
        assert!(owned_cells(&grid, Player::Opponent).is_empty());
    }

    #[test]
    fn test_owned_cells_row_major() {
        let mut grid = Grid::new(4);
        claim(&mut grid, 3, 0, Player::Human);
        claim(&mut grid, 0, 2, Player::Human);
        claim(&mut grid, 1, 0, Player::Human);
        claim(&mut grid, 2, 2, Player::Opponent);
        assert_eq!(
            owned_cells(&grid, Player::Human),
            vec![Position::new(1, 0), Position::new(3, 0), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_empty_neighbors_of_nothing_is_empty() {
        let grid = Grid::new(4);
        assert!(empty_neighbors(&grid, &[]).is_empty());
    }

    #[test]
    fn test_empty_neighbors_center() {
        let mut grid = Grid::new(4);
        claim(&mut grid, 2, 2, Player::Human);
        let mut nbors = empty_neighbors(&grid, &[Position::new(2, 2)]);
        nbors.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            nbors,
            vec![Position::new(1, 2), Position::new(2, 1), Position::new(2, 3), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_empty_neighbors_clipped_at_corner() {
        let mut grid = Grid::new(4);
        claim(&mut grid, 0, 0, Player::Human);
        assert_eq!(
            empty_neighbors(&grid, &[Position::new(0, 0)]),
            vec![Position::new(1, 0), Position::new(0, 1)]
        );
        claim(&mut grid, 3, 3, Player::Human);
        assert_eq!(
            empty_neighbors(&grid, &[Position::new(3, 3)]),
            vec![Position::new(2, 3), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_empty_neighbors_skip_owned_cells() {
        let mut grid = Grid::new(4);
        claim(&mut grid, 1, 1, Player::Human);
        claim(&mut grid, 2, 1, Player::Opponent);
        let nbors = empty_neighbors(&grid, &[Position::new(1, 1)]);
        assert!(!nbors.contains(&Position::new(2, 1)));
        assert_eq!(nbors.len(), 3);
    }

    #[test]
    fn test_empty_neighbors_keep_duplicates() {
        let mut grid = Grid::new(4);
        claim(&mut grid, 1, 1, Player::Human);
        claim(&mut grid, 2, 2, Player::Human);
        let candidates = expansion_candidates(&grid, Player::Human);
        // (2,1) and (1,2) both touch two owned cells.
        assert_eq!(candidates.iter().filter(|&&p| p == Position::new(2, 1)).count(), 2);
        assert_eq!(candidates.iter().filter(|&&p| p == Position::new(1, 2)).count(), 2);
        assert_eq!(candidates.len(), 8);
    }
}
