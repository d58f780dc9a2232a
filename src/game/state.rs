//! Game state and turn controller.
//!
//! `GameState` aggregates the grid, the turn counter and the player to move.
//! Every completed action, including a no-op, advances the turn and hands
//! control to the other player.

use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::config::game::GRID_SIZE;
use crate::game::grid::Grid;
use crate::game::systems::{claim_cell, perform_action};
use crate::game::types::{Action, Phase, Player, Position, TurnSignal};

/// The player who moves first and owns the seed cell.
pub const STARTING_PLAYER: Player = Player::Human;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub turn: u32,
    pub current_player: Player,
}

impl GameState {
    /// New game at the configured grid size.
    pub fn new() -> Self {
        Self::with_size(GRID_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        let mut game_state = GameState {
            grid: Grid::new(size),
            turn: 1,
            current_player: STARTING_PLAYER,
        };
        game_state.seed_start_cell();
        game_state
    }

    /// Start over on the same grid: every cell unowned, turn 1, human to move.
    pub fn new_game(&mut self) {
        self.grid.reset();
        self.turn = 1;
        self.current_player = STARTING_PLAYER;
        self.seed_start_cell();
    }

    fn seed_start_cell(&mut self) {
        let mid = self.grid.size() / 2;
        let player = self.current_player;
        claim_cell(self, Position::new(mid, mid), player);
    }

    pub fn phase(&self) -> Phase {
        match self.current_player {
            Player::Human => Phase::HumanTurn,
            Player::Opponent => Phase::OpponentTurn,
        }
    }

    /// Perform `action` for `player`, then advance the turn.
    pub fn apply_action<R: Rng + ?Sized>(&mut self, action: Action, player: Player, rng: &mut R) -> TurnSignal {
        perform_action(self, action, player, rng);
        self.next_turn()
    }

    /// Advance the counter and flip the player to move.
    ///
    /// The opponent is never run from here; the caller receives
    /// `OpponentMoveRequested` and decides when to invoke it.
    pub fn next_turn(&mut self) -> TurnSignal {
        self.turn += 1;
        self.current_player = self.current_player.other();
        match self.phase() {
            Phase::OpponentTurn => TurnSignal::OpponentMoveRequested,
            Phase::HumanTurn => TurnSignal::AwaitHuman,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
