//! Player actor physics
//!
//! Vertical-only integration: the actor never moves horizontally, the world
//! scrolls past it instead.

use serde::{Deserialize, Serialize};

use super::state::Playfield;
use crate::tuning::Tuning;

/// The player's actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top edge, pixels from the top of the playfield
    pub y: f32,
    /// Vertical velocity (px/tick, positive is down)
    pub vel: f32,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Actor {
    /// Actor resting at the vertical centre of the playable area
    pub fn centered(playfield: &Playfield, tuning: &Tuning) -> Self {
        Self {
            y: Self::centered_y(playfield, tuning),
            vel: 0.0,
            rotation: 0.0,
        }
    }

    /// Top edge that centres the actor between the ceiling and the ground band
    pub fn centered_y(playfield: &Playfield, tuning: &Tuning) -> f32 {
        let playable = playfield.height - tuning.ground_height;
        playable / 2.0 - tuning.actor_size / 2.0
    }

    /// Integrate gravity over `dt` ticks
    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.vel += gravity * dt;
        self.y += self.vel * dt;
    }

    /// Flap. Velocity is replaced, not added to, so rapid jumps never compound.
    pub fn jump(&mut self, jump_strength: f32) {
        self.vel = jump_strength;
    }

    /// Tilt toward the rising pose while moving up, toward the dive pose otherwise
    pub fn update_rotation(&mut self, tuning: &Tuning, dt: f32) {
        if self.vel < 0.0 {
            self.rotation = (self.rotation - tuning.rotate_up_rate * dt).max(tuning.min_rotation);
        } else {
            self.rotation = (self.rotation + tuning.rotate_down_rate * dt).min(tuning.max_rotation);
        }
    }

    /// One physics step: gravity then rotation
    pub fn step(&mut self, tuning: &Tuning, dt: f32) {
        self.apply_gravity(tuning.gravity, dt);
        self.update_rotation(tuning, dt);
    }

    /// Bottom edge of the sprite
    #[inline]
    pub fn bottom(&self, size: f32) -> f32 {
        self.y + size
    }
}
