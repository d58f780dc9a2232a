//! Game rendering system (terminal).
//!
//! Text view of the grid and the status line shown above it. Used for logs and
//! for hosts without a canvas.

use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::types::{Cell, Player};

/// "Turn {turn}: {player}'s turn".
pub fn status_line(game_state: &GameState) -> String {
    format!("Turn {}: {}'s turn", game_state.turn, game_state.current_player)
}

/// Two characters per cell: owner letter (lowercase when the resource flag is
/// set) and level digit for levels above 1.
pub fn cell_symbol(cell: &Cell) -> String {
    let letter = match cell.owner {
        None => return "..".to_string(),
        Some(Player::Human) => 'H',
        Some(Player::Opponent) => 'O',
    };
    let letter = if cell.resource { letter.to_ascii_lowercase() } else { letter };
    let level = match cell.level {
        0 | 1 => ' ',
        n => char::from_digit(n, 10).unwrap_or('+'),
    };
    format!("{letter}{level}")
}

pub fn render_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().map(cell_symbol).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status line followed by the grid.
pub fn render_state(game_state: &GameState) -> String {
    format!("{}\n{}", status_line(game_state), render_grid(&game_state.grid))
}
