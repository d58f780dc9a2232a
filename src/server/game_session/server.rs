//! Game session actors.
//!
//! A `GameSession` owns one game against the scripted opponent and is the
//! scheduler for its deferred moves. `GameSessionManager` creates and drops
//! sessions, one per connected client.

use actix::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use actix::MessageResult;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::game::OPPONENT_DELAY_MS;
use crate::game::input::{handle_click, pixel_to_cell};
use crate::game::state::GameState;
use crate::game::systems::{choose_and_act, render_state, status_line};
use crate::game::types::{Action, Phase, Player, TurnSignal};
use crate::server::game_session::messages::{
    ClientAction, GameStateUpdate, GetGameState, ProcessClientMessage, RegisterClient, ServerEvent,
    StopSession,
};

pub struct GameSession {
    pub game_id: Uuid,
    pub game_state: GameState,

    client: Option<Recipient<ServerEvent>>,
    rng: StdRng,
    opponent_delay: Duration,
    /// Bumped for every scheduled opponent move and every new game; a timer
    /// holding an older value is stale and does nothing.
    opponent_move_id: u64,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Started game_id={}", self.game_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Stopped game_id={} at turn {}", self.game_id, self.game_state.turn);
    }
}

impl GameSession {
    pub fn new(game_id: Uuid) -> Self {
        Self {
            game_id,
            game_state: GameState::new(),
            client: None,
            rng: StdRng::from_rng(&mut rand::rng()),
            opponent_delay: Duration::from_millis(OPPONENT_DELAY_MS),
            opponent_move_id: 0,
        }
    }

    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn send_state(&self) {
        debug!(
            "[GameSession] Broadcast GameState: game_id={}\n{}",
            self.game_id,
            render_state(&self.game_state)
        );
        if let Some(client) = &self.client {
            client.do_send(ServerEvent::StateUpdate(GameStateUpdate {
                game_id: self.game_id,
                state: self.game_state.clone(),
                status: status_line(&self.game_state),
            }));
        }
    }

    fn reject(&self, code: &'static str, message: &str) {
        if let Some(client) = &self.client {
            client.do_send(ServerEvent::Rejected { code, message: message.to_string() });
        }
    }

    /// Act on the turn controller's signal once the state has been broadcast.
    fn after_transition(&mut self, signal: TurnSignal, ctx: &mut Context<Self>) {
        if signal == TurnSignal::OpponentMoveRequested {
            self.schedule_opponent(ctx);
        }
    }

    fn schedule_opponent(&mut self, ctx: &mut Context<Self>) {
        self.opponent_move_id += 1;
        let move_id = self.opponent_move_id;
        ctx.run_later(self.opponent_delay, move |act, ctx| {
            act.play_opponent_turn(move_id, ctx);
        });
    }

    fn play_opponent_turn(&mut self, move_id: u64, ctx: &mut Context<Self>) {
        // A new game may have superseded this move; the timer still fires.
        if move_id != self.opponent_move_id || self.game_state.phase() != Phase::OpponentTurn {
            debug!("[GameSession] Stale opponent move {} skipped, game_id={}", move_id, self.game_id);
            return;
        }
        let signal = choose_and_act(&mut self.game_state, &mut self.rng);
        self.send_state();
        self.after_transition(signal, ctx);
    }

    fn human_action(&mut self, action: Action, ctx: &mut Context<Self>) {
        if self.game_state.phase() != Phase::HumanTurn {
            warn!("[GameSession] {} received during the opponent's turn, game_id={}", action, self.game_id);
            self.reject("NOT_YOUR_TURN", "Wait for the opponent to finish its move.");
            return;
        }
        let signal = self.game_state.apply_action(action, Player::Human, &mut self.rng);
        self.send_state();
        self.after_transition(signal, ctx);
    }

    fn human_click(&mut self, x: f64, y: f64, ctx: &mut Context<Self>) {
        if self.game_state.phase() != Phase::HumanTurn {
            debug!("[GameSession] Click ignored during the opponent's turn");
            return;
        }
        let Some(pos) = pixel_to_cell(&self.game_state, x, y) else {
            debug!("[GameSession] Click outside the grid at ({}, {})", x, y);
            return;
        };
        if let Some(signal) = handle_click(&mut self.game_state, pos) {
            self.send_state();
            self.after_transition(signal, ctx);
        }
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        match msg.msg {
            ClientAction::Action(action) => self.human_action(action, ctx),
            ClientAction::Click { x, y } => self.human_click(x, y, ctx),
            ClientAction::NewGame => {
                info!("[GameSession] New game requested, game_id={}", self.game_id);
                self.opponent_move_id += 1;
                self.game_state.new_game();
                self.send_state();
            }
        }
    }
}

impl Handler<RegisterClient> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterClient, _: &mut Context<Self>) -> Self::Result {
        self.client = Some(msg.addr);
        self.send_state();
    }
}

impl Handler<GetGameState> for GameSession {
    type Result = MessageResult<GetGameState>;

    fn handle(&mut self, _: GetGameState, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.clone())
    }
}

impl Handler<StopSession> for GameSession {
    type Result = ();

    fn handle(&mut self, _: StopSession, ctx: &mut Context<Self>) -> Self::Result {
        ctx.stop();
    }
}

pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

#[derive(Message)]
#[rtype(result = "(Uuid, Addr<GameSession>)")]
pub struct CreateGame;

#[derive(Message)]
#[rtype(result = "()")]
pub struct EndGame {
    pub game_id: Uuid,
}

/// Number of games the manager is tracking.
#[derive(Message)]
#[rtype(result = "usize")]
pub struct ActiveGames;

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_game(&mut self) -> (Uuid, Addr<GameSession>) {
        let game_id = Uuid::new_v4();
        let session = GameSession::new(game_id).start();

        self.sessions.insert(game_id, session.clone());
        info!("[GameSessionManager] Game created, game_id={} active={}", game_id, self.sessions.len());
        (game_id, session)
    }
}

impl Default for GameSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, _: CreateGame, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_game())
    }
}

impl Handler<EndGame> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: EndGame, _: &mut Context<Self>) -> Self::Result {
        match self.sessions.remove(&msg.game_id) {
            Some(session) => {
                session.do_send(StopSession);
                info!("[GameSessionManager] Game ended, game_id={} active={}", msg.game_id, self.sessions.len());
            }
            None => warn!("[GameSessionManager] EndGame for unknown game_id={}", msg.game_id),
        }
    }
}

impl Handler<ActiveGames> for GameSessionManager {
    type Result = usize;

    fn handle(&mut self, _: ActiveGames, _: &mut Context<Self>) -> Self::Result {
        self.sessions.len()
    }
}
