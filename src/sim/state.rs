//! Game state and core simulation types
//!
//! Everything the loop mutates between frames lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::floor_y;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; waiting for restart
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Landed,
    /// Obstacle scrolled off and was recycled
    ObstacleCleared { score: u32 },
    /// Player hit the obstacle; run is over
    Collided { score: u32 },
    Restarted,
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Only `y` is integrated; horizontal position is fixed
    pub velocity: Vec2,
    /// Jump in progress
    pub airborne: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                PLAYER_X,
                floor_y(ENTITY_HEIGHT),
                ENTITY_WIDTH,
                ENTITY_HEIGHT,
            ),
            velocity: Vec2::ZERO,
            airborne: false,
        }
    }
}

impl Player {
    /// Resting y for this player on the ground
    #[inline]
    pub fn floor_y(&self) -> f32 {
        floor_y(self.rect.height())
    }

    pub fn on_ground(&self) -> bool {
        !self.airborne && self.rect.pos.y >= self.floor_y()
    }
}

/// The approaching obstacle (recycled, never destroyed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Leftward speed, fixed for the run
    pub speed: f32,
}

impl Obstacle {
    /// Spawn just past the right edge, resting on the ground
    pub fn spawn(speed: f32) -> Self {
        Self {
            rect: Rect::new(
                SCREEN_WIDTH,
                floor_y(ENTITY_HEIGHT),
                ENTITY_WIDTH,
                ENTITY_HEIGHT,
            ),
            speed,
        }
    }
}

/// Complete game state (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Obstacles survived this run
    pub score: u32,
    /// Frames simulated this run
    pub time_ticks: u64,
    pub player: Player,
    pub obstacle: Obstacle,
    /// Physics parameters
    pub tuning: Tuning,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh run with the given tuning
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            obstacle: Obstacle::spawn(tuning.obstacle_speed),
            tuning,
            events: Vec::new(),
        }
    }

    /// Reset both entities and the score in place and resume play
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.time_ticks = 0;
        self.player = Player::default();
        self.obstacle = Obstacle::spawn(self.tuning.obstacle_speed);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Serialize for debug logging; `None` if serialization fails
    pub fn snapshot_json(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to serialize game state: {}", e);
                None
            }
        }
    }
}
