//! Data-driven physics parameters
//!
//! The simulation never reads the physics constants directly; it reads a
//! `Tuning` carried in the game state. Defaults come from `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Vertical velocity applied when a jump starts
    pub jump_velocity: f32,
    /// Obstacle speed at spawn, constant for the whole run
    pub obstacle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            obstacle_speed: OBSTACLE_SPEED,
        }
    }
}

impl Tuning {
    /// Seconds from takeoff until the player is back on the ground
    pub fn airtime(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        2.0 * -self.jump_velocity / self.gravity
    }

    /// Peak height reached above the floor line
    pub fn jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}
