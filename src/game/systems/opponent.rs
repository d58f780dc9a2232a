//! Scripted opponent.
//!
//! No strategy: one of the three actions is drawn uniformly at random and
//! submitted through the same entry point the human uses.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::state::GameState;
use crate::game::types::{Action, Player, TurnSignal};

/// Draw one action uniformly.
pub fn choose_action<R: Rng + ?Sized>(rng: &mut R) -> Action {
    Action::ALL.choose(rng).copied().unwrap_or(Action::Expand)
}

/// Play one opponent move and advance the turn.
pub fn choose_and_act<R: Rng + ?Sized>(game_state: &mut GameState, rng: &mut R) -> TurnSignal {
    let action = choose_action(rng);
    debug!("[Opponent] Turn {}: chose {}", game_state.turn, action);
    game_state.apply_action(action, Player::Opponent, rng)
}
