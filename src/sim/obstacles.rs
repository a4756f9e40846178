//! Scrolling obstacle field
//!
//! Obstacles enter at the right edge of the playfield on a fixed simulated
//! timer, scroll left at the world speed and leave from the front of the
//! queue in the order they arrived.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sequence::SequenceState;
use super::state::Playfield;
use crate::tuning::Tuning;

/// A pipe pair: an upper barrier, a gap, and a lower barrier down to the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Height of the upper barrier (its bottom edge)
    pub top_height: f32,
    /// Vertical opening for this obstacle
    pub gap: f32,
    /// Set once, when the actor gets past this obstacle
    pub passed: bool,
}

impl Obstacle {
    /// Right (trailing) edge
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Top edge of the lower barrier
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + self.gap
    }
}

/// Live obstacles in spawn order plus the spawn timer
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
    spawn_timer_ms: f32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every obstacle and set the spawn timer. Ids keep counting up.
    pub fn reset(&mut self, spawn_timer_ms: f32) {
        self.obstacles.clear();
        self.spawn_timer_ms = spawn_timer_ms;
    }

    /// Scroll every obstacle left by `dt` ticks of world speed
    pub fn advance(&mut self, tuning: &Tuning, dt: f32) {
        let shift = tuning.scroll_speed * dt;
        for obstacle in &mut self.obstacles {
            obstacle.x -= shift;
        }
    }

    /// Accumulate `elapsed_ms` and spawn at the right edge once the interval is reached.
    ///
    /// Returns the id of the spawned obstacle, if any.
    pub fn try_spawn(
        &mut self,
        elapsed_ms: f32,
        playfield: &Playfield,
        sequence: &mut SequenceState,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Option<u32> {
        self.spawn_timer_ms += elapsed_ms;
        if self.spawn_timer_ms < tuning.spawn_interval_ms {
            return None;
        }
        self.spawn_timer_ms = 0.0;

        let prev_height = self.obstacles.back().map(|o| o.top_height);
        let placement = sequence.next_placement(prev_height, playfield.height, tuning, rng);

        self.next_id += 1;
        let id = self.next_id;
        self.obstacles.push_back(Obstacle {
            id,
            x: playfield.width,
            top_height: placement.top_height,
            gap: placement.gap,
            passed: false,
        });
        Some(id)
    }

    /// Remove obstacles whose trailing edge is well past the left boundary.
    ///
    /// Only the front of the queue is inspected; obstacles leave in arrival order.
    pub fn prune(&mut self, tuning: &Tuning) -> usize {
        let mut removed = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|o| o.right(tuning.obstacle_width) < -tuning.prune_margin)
        {
            self.obstacles.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn spawn_timer_ms(&self) -> f32 {
        self.spawn_timer_ms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn back(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Insert a ready-made obstacle at the back (scenario setup)
    pub fn push(&mut self, obstacle: Obstacle) {
        self.next_id = self.next_id.max(obstacle.id);
        self.obstacles.push_back(obstacle);
    }
}
