//! Pointer input.
//!
//! Translates canvas pixels to grid coordinates and applies a click as a
//! targeted expansion. A click outside the current player's expansion
//! candidates leaves the game untouched.

use log::debug;

use crate::config::game::CELL_SIZE;
use crate::game::state::GameState;
use crate::game::systems::claim_cell;
use crate::game::territory::expansion_candidates;
use crate::game::types::{Position, TurnSignal};

/// Canvas pixel to grid coordinate, `None` when outside the grid.
pub fn pixel_to_cell(game_state: &GameState, px: f64, py: f64) -> Option<Position> {
    if !(px >= 0.0 && py >= 0.0) {
        return None;
    }
    let pos = Position {
        x: (px / CELL_SIZE as f64).floor() as usize,
        y: (py / CELL_SIZE as f64).floor() as usize,
    };
    game_state.grid.contains(pos).then_some(pos)
}

/// Claim `pos` for the player to move if it borders their territory.
///
/// Returns the turn signal when the click was accepted, `None` when ignored.
pub fn handle_click(game_state: &mut GameState, pos: Position) -> Option<TurnSignal> {
    let player = game_state.current_player;
    if !expansion_candidates(&game_state.grid, player).contains(&pos) {
        debug!("[Input] Click on ({}, {}) ignored for {}", pos.x, pos.y, player);
        return None;
    }
    claim_cell(game_state, pos, player);
    Some(game_state.next_turn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Player;

    #[test]
    fn test_pixel_to_cell() {
        let state = GameState::new();
        let cell = CELL_SIZE as f64;
        assert_eq!(pixel_to_cell(&state, 0.0, 0.0), Some(Position::new(0, 0)));
        assert_eq!(pixel_to_cell(&state, cell * 3.5, cell * 1.2), Some(Position::new(3, 1)));
        assert_eq!(pixel_to_cell(&state, -1.0, 4.0), None);
        assert_eq!(pixel_to_cell(&state, cell * 40.0, 0.0), None);
        assert_eq!(pixel_to_cell(&state, f64::NAN, 0.0), None);
    }

    #[test]
    fn test_click_on_candidate_claims_it() {
        let mut state = GameState::with_size(4);
        let signal = handle_click(&mut state, Position::new(2, 1));

        assert_eq!(signal, Some(TurnSignal::OpponentMoveRequested));
        let cell = state.grid.get(Position::new(2, 1)).copied().unwrap_or_default();
        assert_eq!(cell.owner, Some(Player::Human));
        assert_eq!(cell.level, 1);
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn test_click_elsewhere_is_ignored() {
        let mut state = GameState::with_size(4);
        let before = state.clone();

        // Not adjacent, already owned, and out of range.
        for pos in [Position::new(0, 0), Position::new(2, 2), Position::new(8, 8)] {
            assert_eq!(handle_click(&mut state, pos), None);
        }
        assert_eq!(state.grid, before.grid);
        assert_eq!(state.turn, before.turn);
        assert_eq!(state.current_player, before.current_player);
    }
}
