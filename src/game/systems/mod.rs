pub mod actions;
pub mod opponent;
pub mod render;

pub use actions::*;
pub use opponent::*;
pub use render::*;
