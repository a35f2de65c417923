//! Simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - No rendering or platform dependencies
//! - State in, state out; the frame delta is the only clock

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, player_hits_obstacle};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{PlayerStep, TickInput, advance_obstacle, step_player, tick};
