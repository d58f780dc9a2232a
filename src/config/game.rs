/// Game configuration constants.
///
/// This module defines the fixed gameplay parameters: grid dimensions,
/// the pixel geometry the browser canvas uses, and the opponent pacing delay.

/// Side length of the square game grid, in cells.
pub const GRID_SIZE: usize = 32;

/// Side length of the rendering canvas, in pixels.
pub const CANVAS_SIZE: u32 = 320;

/// Side length of one grid cell on the canvas, in pixels.
pub const CELL_SIZE: u32 = CANVAS_SIZE / GRID_SIZE as u32;

/// Delay (in milliseconds) before the scripted opponent plays its move,
/// so the human can see the previous move first.
pub const OPPONENT_DELAY_MS: u64 = 300;
