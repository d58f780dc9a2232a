//! HTTP and WebSocket routing configuration.
//!
//! One endpoint: each WebSocket connection on `/ws/game` gets its own game.

use actix_web::web;
use crate::server::game_session::session::ws_game;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_game)
    );
}
