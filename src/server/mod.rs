// src/server/mod.rs

//! Server layer root module.
//!
//! Hosts the engine for a browser presentation layer:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game sessions (one game per connection, opponent move scheduling)

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
