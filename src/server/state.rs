// src/server/state.rs

//! Application state for the host server.
//!
//! Holds the game session manager address shared by the WebSocket handlers.

use actix::Addr;
use crate::server::game_session::server::GameSessionManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game session manager actor (creates and ends games).
    pub game_session_manager: Addr<GameSessionManager>,
}

impl AppState {
    pub fn new(game_session_manager: Addr<GameSessionManager>) -> Self {
        AppState { game_session_manager }
    }
}
