//! Data-driven game balance
//!
//! Every gameplay constant is a named field on [`Tuning`] so hosts can
//! override any of them from JSON without recompiling. Units are pixels and
//! ticks (one tick = one idealized 60 Hz frame) unless the name says `_ms`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Mode;

/// Errors produced while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    /// The JSON could not be parsed
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but are unusable
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Inclusive range of obstacles in one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLength {
    pub min: u32,
    pub max: u32,
}

impl RunLength {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Weighted discrete distribution over generation modes.
///
/// Entries are `(mode, cumulative_threshold)` in ascending threshold order.
/// A sample `r` in [0, 1) picks the first entry with `r < threshold`; the
/// last entry catches anything above every threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeTable {
    pub entries: Vec<(Mode, f32)>,
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (Mode::Normal, 0.45),
                (Mode::Easy, 0.70),
                (Mode::Hard, 0.85),
                (Mode::Slope, 1.0),
            ],
        }
    }
}

impl ModeTable {
    /// Pick the mode for a uniform sample `r`
    pub fn sample(&self, r: f32) -> Mode {
        self.entries
            .iter()
            .find(|&&(_, threshold)| r < threshold)
            .or(self.entries.last())
            .map(|&(mode, _)| mode)
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.entries.is_empty() {
            return Err(TuningError::Invalid("mode table is empty"));
        }
        let mut prev = 0.0;
        for &(_, threshold) in &self.entries {
            if !(0.0..=1.0).contains(&threshold) || threshold < prev {
                return Err(TuningError::Invalid(
                    "mode thresholds must be ascending within [0, 1]",
                ));
            }
            prev = threshold;
        }
        Ok(())
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor ===
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Velocity set by a jump; negative is up
    pub jump_strength: f32,
    /// Actor sprite edge length
    pub actor_size: f32,
    /// Fixed horizontal position of the actor's left edge
    pub actor_x: f32,
    /// Hit-box shrink on every side of the actor sprite
    pub hitbox_inset: f32,
    /// Rotation applied at session start (degrees)
    pub start_rotation: f32,
    /// Rotation toward `min_rotation` while rising (deg/tick)
    pub rotate_up_rate: f32,
    /// Rotation toward `max_rotation` while falling (deg/tick)
    pub rotate_down_rate: f32,
    pub min_rotation: f32,
    pub max_rotation: f32,

    // === World ===
    /// Horizontal world scroll (px/tick)
    pub scroll_speed: f32,
    /// Height of the ground band at the bottom of the playfield
    pub ground_height: f32,
    /// Playfield width cap
    pub max_game_width: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub base_gap: f32,
    pub easy_gap_bonus: f32,
    pub hard_gap_penalty: f32,
    pub min_obstacle_height: f32,
    /// Easy obstacles land within ± this of the valid range's midpoint
    pub easy_offset: f32,
    /// Height change between consecutive slope obstacles
    pub slope_step: f32,
    pub spawn_interval_ms: f32,
    /// Spawn timer value at session start (first obstacle arrives sooner)
    pub spawn_timer_prime_ms: f32,
    /// Distance past the left edge an obstacle's trailing edge travels before removal
    pub prune_margin: f32,

    // === Sequencing ===
    pub mode_table: ModeTable,
    /// Run length for Normal, Easy and Hard runs
    pub short_run: RunLength,
    pub slope_run: RunLength,

    // === Particles ===
    pub burst_count: u32,
    /// Life lost per tick
    pub particle_decay: f32,

    // === Timing ===
    pub ideal_frame_ms: f32,
    pub max_frame_ms: f32,
    pub shake_duration_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_strength: -8.0,
            actor_size: 40.0,
            actor_x: 32.0,
            hitbox_inset: 12.0,
            start_rotation: -20.0,
            rotate_up_rate: 5.0,
            rotate_down_rate: 3.0,
            min_rotation: -25.0,
            max_rotation: 90.0,

            scroll_speed: 3.5,
            ground_height: 140.0,
            max_game_width: MAX_GAME_WIDTH,

            obstacle_width: 64.0,
            base_gap: 175.0,
            easy_gap_bonus: 25.0,
            hard_gap_penalty: 25.0,
            min_obstacle_height: 50.0,
            easy_offset: 50.0,
            slope_step: 60.0,
            spawn_interval_ms: 1500.0,
            spawn_timer_prime_ms: 1300.0,
            prune_margin: 236.0,

            mode_table: ModeTable::default(),
            short_run: RunLength::new(2, 4),
            slope_run: RunLength::new(3, 6),

            burst_count: 4,
            particle_decay: 0.04,

            ideal_frame_ms: IDEAL_FRAME_MS,
            max_frame_ms: MAX_FRAME_MS,
            shake_duration_ms: SHAKE_DURATION_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.ideal_frame_ms > 0.0) {
            return Err(TuningError::Invalid("ideal_frame_ms must be positive"));
        }
        if !(self.max_frame_ms > 0.0) {
            return Err(TuningError::Invalid("max_frame_ms must be positive"));
        }
        if !(self.spawn_interval_ms > 0.0) {
            return Err(TuningError::Invalid("spawn_interval_ms must be positive"));
        }
        if self.short_run.min > self.short_run.max || self.slope_run.min > self.slope_run.max {
            return Err(TuningError::Invalid("run length min exceeds max"));
        }
        if self.min_obstacle_height < 0.0 {
            return Err(TuningError::Invalid("min_obstacle_height must not be negative"));
        }
        self.mode_table.validate()
    }

    /// Vertical opening for obstacles of a given mode
    pub fn gap_for(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Easy => self.base_gap + self.easy_gap_bonus,
            Mode::Hard => self.base_gap - self.hard_gap_penalty,
            Mode::Normal | Mode::Slope => self.base_gap,
        }
    }

    /// Run length range for a mode
    pub fn run_length(&self, mode: Mode) -> RunLength {
        match mode {
            Mode::Slope => self.slope_run,
            _ => self.short_run,
        }
    }
}
