//! Build-time configuration. None of these are runtime-reconfigurable.

use macroquad::color::Color;

/// Logical grid width in cells. Must stay a multiple of 8 (bit packing).
pub const GRID_WIDTH: usize = 512;

/// Logical grid height in cells. Must stay a multiple of 8 (bit packing).
pub const GRID_HEIGHT: usize = 512;

/// Upper bound on presented frames per second.
pub const TARGET_FPS: u32 = 60;

/// Window pixels per logical cell at startup.
pub const SCALE: usize = 2;

/// Color written for a live cell (opaque green).
pub const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Color written for a dead cell (opaque black).
pub const DEAD_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

pub const WINDOW_TITLE: &str = "Game of Life";
