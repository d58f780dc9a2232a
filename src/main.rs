//! Main entry point for the territory game host.
//!
//! Initializes the actor system and launches the HTTP server whose WebSocket
//! endpoint lets a browser canvas play against the scripted opponent.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::game_session::server::GameSessionManager;

use crate::config::server::{BIND_ADDR, BIND_PORT};

mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Start the GameSessionManager actor (one game per connection).
    let game_session_manager = GameSessionManager::new().start();

    let state = web::Data::new(server::state::AppState::new(game_session_manager));

    info!("Listening on {}:{}", BIND_ADDR, BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_ADDR, BIND_PORT))?
    .run()
    .await
}
