//! Action engine.
//!
//! Applies Expand, Develop or Deal to the grid for one player. Targets are drawn
//! uniformly from the legal candidates with the caller's random source. Every
//! action is total: with no candidate it changes nothing.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::state::GameState;
use crate::game::territory::{expansion_candidates, owned_cells};
use crate::game::types::{Action, Player, Position};

/// Apply `action` for `player`. Returns the cell that changed, if any.
///
/// This does not advance the turn; see `GameState::apply_action`.
pub fn perform_action<R: Rng + ?Sized>(
    game_state: &mut GameState,
    action: Action,
    player: Player,
    rng: &mut R,
) -> Option<Position> {
    let target = match action {
        Action::Expand => expand(game_state, player, rng),
        Action::Develop => develop(game_state, player, rng),
        Action::Deal => deal(game_state, player, rng),
    };

    match target {
        Some(pos) => debug!("[Engine] {} by {} on ({}, {})", action, player, pos.x, pos.y),
        None => debug!("[Engine] {} by {} had no target", action, player),
    }
    target
}

/// Claim a random empty cell bordering the player's territory.
pub fn expand<R: Rng + ?Sized>(game_state: &mut GameState, player: Player, rng: &mut R) -> Option<Position> {
    let candidates = expansion_candidates(&game_state.grid, player);
    let pos = *candidates.choose(rng)?;
    claim_cell(game_state, pos, player);
    Some(pos)
}

/// Raise the level of a random owned cell by one.
pub fn develop<R: Rng + ?Sized>(game_state: &mut GameState, player: Player, rng: &mut R) -> Option<Position> {
    let owned = owned_cells(&game_state.grid, player);
    let pos = *owned.choose(rng)?;
    let cell = game_state.grid.get_mut(pos)?;
    cell.level += 1;
    Some(pos)
}

/// Flip the resource flag of a random owned cell.
pub fn deal<R: Rng + ?Sized>(game_state: &mut GameState, player: Player, rng: &mut R) -> Option<Position> {
    let owned = owned_cells(&game_state.grid, player);
    let pos = *owned.choose(rng)?;
    let cell = game_state.grid.get_mut(pos)?;
    cell.resource = !cell.resource;
    Some(pos)
}

/// Give `pos` to `player` at level 1. Out-of-range coordinates are ignored.
pub fn claim_cell(game_state: &mut GameState, pos: Position, player: Player) {
    if let Some(cell) = game_state.grid.get_mut(pos) {
        cell.owner = Some(player);
        cell.level = 1;
    }
}
