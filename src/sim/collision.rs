//! Collision detection
//!
//! Everything is axis-aligned. The actor collides through a hit-box inset
//! from its sprite on every side, so grazing a pipe corner is forgiven.

use super::actor::Actor;
use super::obstacles::{Obstacle, ObstacleField};
use super::state::Playfield;
use crate::tuning::Tuning;

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Shrink by `pad` on every side
    pub fn inset(self, pad: f32) -> Self {
        Self {
            left: self.left + pad,
            top: self.top + pad,
            right: self.right - pad,
            bottom: self.bottom - pad,
        }
    }

    /// Strict horizontal overlap with the column `[left, right]`
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.right > left && self.left < right
    }
}

/// The actor's sprite bounds
pub fn actor_rect(actor: &Actor, tuning: &Tuning) -> Rect {
    Rect::new(tuning.actor_x, actor.y, tuning.actor_size, tuning.actor_size)
}

/// The forgiving collision box
pub fn actor_hitbox(actor: &Actor, tuning: &Tuning) -> Rect {
    actor_rect(actor, tuning).inset(tuning.hitbox_inset)
}

/// Y coordinate of the top of the ground band
#[inline]
pub fn ground_line(playfield: &Playfield, tuning: &Tuning) -> f32 {
    playfield.height - tuning.ground_height
}

/// Touching the ground is fatal; the boundary itself counts
pub fn hits_ground(actor: &Actor, playfield: &Playfield, tuning: &Tuning) -> bool {
    actor.bottom(tuning.actor_size) >= ground_line(playfield, tuning)
}

/// Rest the actor on the ground line so the final frame never shows it sunk in
pub fn snap_to_ground(actor: &mut Actor, playfield: &Playfield, tuning: &Tuning) {
    actor.y = ground_line(playfield, tuning) - tuning.actor_size;
}

/// Hit-box overlaps the obstacle column while outside its gap window
pub fn hits_obstacle(hitbox: &Rect, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    if !hitbox.overlaps_x(obstacle.x, obstacle.right(tuning.obstacle_width)) {
        return false;
    }
    hitbox.top < obstacle.top_height || hitbox.bottom > obstacle.gap_bottom()
}

/// The actor's left edge is beyond the obstacle's right edge.
///
/// Vertical position plays no part: surviving the column is the collision
/// check's job.
#[inline]
pub fn is_past(tuning: &Tuning, obstacle: &Obstacle) -> bool {
    tuning.actor_x > obstacle.right(tuning.obstacle_width)
}

/// Outcome of checking every live obstacle against the actor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleCheck {
    /// The actor is inside a barrier
    pub collided: bool,
    /// Obstacles newly flagged as passed this frame
    pub passed: u32,
}

/// Collision and pass detection over the whole field, in spawn order.
///
/// Stops at the first collision. Each obstacle's `passed` flag flips at most
/// once over its lifetime, so a pass is never counted twice.
pub fn check_obstacles(actor: &Actor, field: &mut ObstacleField, tuning: &Tuning) -> ObstacleCheck {
    let hitbox = actor_hitbox(actor, tuning);
    let mut check = ObstacleCheck::default();

    for obstacle in field.iter_mut() {
        if hits_obstacle(&hitbox, obstacle, tuning) {
            check.collided = true;
            break;
        }
        if !obstacle.passed && is_past(tuning, obstacle) {
            obstacle.passed = true;
            check.passed += 1;
        }
    }

    check
}
