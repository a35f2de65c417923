//! Dino Run - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, game state)
//! - `renderer`: Projection of game state into 2D draw calls
//! - `platform`: Window/input/clock abstraction (macroquad backed)
//! - `game`: Per-frame loop driver
//! - `tuning`: Physics parameters fed to the simulation

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, LoopControl};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;
    pub const WINDOW_TITLE: &str = "Dino Run";

    /// Height of the ground strip along the bottom edge
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Player and obstacle share one box size
    pub const ENTITY_WIDTH: f32 = 40.0;
    pub const ENTITY_HEIGHT: f32 = 40.0;

    /// Player column (never changes)
    pub const PLAYER_X: f32 = 100.0;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Vertical velocity set on jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -450.0;
    /// Obstacle scroll speed at spawn (units/s)
    pub const OBSTACLE_SPEED: f32 = 200.0;

    /// Frame rate cap
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta handed to the simulation (stalls are clamped)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Resting y of an entity of the given height standing on the ground
#[inline]
pub fn floor_y(height: f32) -> f32 {
    consts::SCREEN_HEIGHT - consts::GROUND_HEIGHT - height
}
