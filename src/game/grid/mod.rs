//! Grid storage module.

pub mod grid;

pub use grid::*;
