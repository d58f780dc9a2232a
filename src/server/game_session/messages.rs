use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::state::GameState;
use crate::game::types::Action;

/// Command sent by the browser.
///
/// JSON forms: `{"Action":"Expand"}`, `{"Click":{"x":12.0,"y":40.5}}`, `"NewGame"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientAction {
    Action(Action),
    /// Canvas pixel coordinates.
    Click { x: f64, y: f64 },
    NewGame,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientAction,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GameStateUpdate {
    pub game_id: Uuid,
    pub state: GameState,
    pub status: String,
}

/// Everything a game session pushes to its client.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub enum ServerEvent {
    StateUpdate(GameStateUpdate),
    Rejected { code: &'static str, message: String },
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterClient {
    pub addr: Recipient<ServerEvent>,
}

#[derive(Message)]
#[rtype(result = "GameState")]
pub struct GetGameState;

#[derive(Message)]
#[rtype(result = "()")]
pub struct StopSession;
