pub mod types;
pub mod state;
pub mod territory;
pub mod input;

pub mod grid;
pub mod systems;
