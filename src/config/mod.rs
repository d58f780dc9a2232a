/// Main configuration module.
///
/// Re-exports submodules for game and host configuration.
pub mod game;
pub mod server;
