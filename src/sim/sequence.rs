//! Obstacle sequencing
//!
//! Obstacles come in runs that share a generation mode. When a run is used
//! up, a new mode is drawn from the tuning's [`ModeTable`](crate::ModeTable)
//! together with a run length; every spawn then consumes one unit of the run
//! before its height is computed, so the mode covers the whole run including
//! the spawn that started it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Obstacle generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Full-range random heights
    #[default]
    Normal,
    /// Wider gap, heights near the middle
    Easy,
    /// Narrower gap, full-range random heights
    Hard,
    /// Heights step up or down by a fixed amount, bouncing off the bounds
    Slope,
}

/// Current run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceState {
    pub mode: Mode,
    /// Obstacles left in this run; a new run is drawn at 0
    pub remaining: u32,
    /// +1.0 (downwards) or -1.0 (upwards); only used by slope runs
    pub direction: f32,
}

impl Default for SequenceState {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            remaining: 0,
            direction: 1.0,
        }
    }
}

/// Height and gap for one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top_height: f32,
    pub gap: f32,
}

/// Valid `[min, max]` for an upper barrier height.
///
/// When the playfield is too short for the gap, `max` is raised to `min`
/// so a (tight) obstacle can still be produced.
pub fn height_range(tuning: &Tuning, gap: f32, playfield_height: f32) -> (f32, f32) {
    let min = tuning.min_obstacle_height;
    let max = playfield_height - tuning.ground_height - gap - min;
    (min, max.max(min))
}

impl SequenceState {
    /// Draw a new run: mode, length, and (for slopes) direction
    pub fn start_run(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        let mode = tuning.mode_table.sample(rng.random::<f32>());
        let length = tuning.run_length(mode);

        self.mode = mode;
        self.remaining = rng.random_range(length.min..=length.max);
        if mode == Mode::Slope {
            self.direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        }

        log::debug!(
            "New run: {:?} x{} (direction {})",
            self.mode,
            self.remaining,
            self.direction
        );
    }

    /// Produce the next obstacle, starting a new run first if needed.
    ///
    /// `prev_height` is the top height of the most recently spawned obstacle.
    pub fn next_placement(
        &mut self,
        prev_height: Option<f32>,
        playfield_height: f32,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Placement {
        if self.remaining == 0 {
            self.start_run(tuning, rng);
        }
        self.remaining = self.remaining.saturating_sub(1);

        let gap = tuning.gap_for(self.mode);
        let (min, max) = height_range(tuning, gap, playfield_height);

        let height = match self.mode {
            Mode::Easy => {
                let center = (min + max) / 2.0;
                center + (rng.random::<f32>() * 2.0 - 1.0) * tuning.easy_offset
            }
            Mode::Normal | Mode::Hard => rng.random::<f32>() * (max - min) + min,
            Mode::Slope => {
                let prev = prev_height.unwrap_or(max / 2.0);
                let next = prev + tuning.slope_step * self.direction;
                if next < min || next > max {
                    // Bounce off the boundary and keep the run going
                    self.direction = -self.direction;
                    next.clamp(min, max)
                } else {
                    next
                }
            }
        };

        Placement {
            top_height: height.floor().clamp(min, max),
            gap,
        }
    }
}
