//! Collision detection between axis-aligned boxes
//!
//! Edges that merely touch do not count as a hit: every comparison is strict.

use super::rect::Rect;
use super::state::{Obstacle, Player};

/// True iff the two boxes overlap on both axes
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Check whether the player is touching the obstacle
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    aabb_overlap(&player.rect, &obstacle.rect)
}
