//! Game state and core simulation types
//!
//! All mutable simulation state lives in [`GameState`] and is only touched
//! by [`tick`](super::tick::tick). Renderers read a [`RenderSnapshot`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::{Obstacle, ObstacleField};
use super::particles::{Particle, ParticleSystem};
use super::score::ScoreTracker;
use super::sequence::SequenceState;
use crate::tuning::Tuning;

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Title screen, only at process start
    Welcome,
    /// Waiting for the jump that starts a session
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; a jump starts a new one
    GameOver,
}

/// Playable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Playfield for a window, with the width capped to the game column
    pub fn from_window(width: f32, height: f32, max_width: f32) -> Self {
        Self {
            width: width.min(max_width),
            height,
        }
    }

    /// Non-positive or non-finite dimensions pause the simulation
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Things that happened during a tick, for collaborators (audio, storage, UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Welcome screen dismissed
    Ready,
    /// Score, actor, obstacles and particles were reset and play began
    SessionStarted,
    /// Flap impulse applied
    Jumped,
    /// An obstacle was passed
    Scored { score: u32 },
    /// Play stopped and the session returned to Ready
    Paused,
    /// Fatal collision
    GameOver { score: u32, best: u32, new_best: bool },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub status: SessionStatus,
    pub scores: ScoreTracker,
    pub actor: Actor,
    pub obstacles: ObstacleField,
    pub particles: ParticleSystem,
    pub sequence: SequenceState,
    pub playfield: Playfield,
    /// Remaining game-over shake
    pub shake_ms: f32,
    /// Set while the playfield is unusable, so the warning is logged once
    pub(crate) playfield_degenerate: bool,
}

impl GameState {
    /// Fresh state on the welcome screen
    pub fn new(seed: u64, tuning: Tuning, playfield: Playfield, best_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            actor: Actor::centered(&playfield, &tuning),
            tuning,
            status: SessionStatus::Welcome,
            scores: ScoreTracker::new(best_score),
            obstacles: ObstacleField::new(),
            particles: ParticleSystem::new(),
            sequence: SequenceState::default(),
            playfield,
            shake_ms: 0.0,
            playfield_degenerate: false,
        }
    }

    /// Reset everything a session owns and launch the actor upward
    pub fn reset_session(&mut self) {
        self.scores.reset();
        self.actor = Actor::centered(&self.playfield, &self.tuning);
        self.actor.jump(self.tuning.jump_strength);
        self.actor.rotation = self.tuning.start_rotation;
        self.obstacles.reset(self.tuning.spawn_timer_prime_ms);
        self.particles.clear();
        self.sequence = SequenceState::default();
        self.status = SessionStatus::Playing;
    }

    /// Puff from the actor's rear underside
    pub fn spawn_trail(&mut self) {
        let size = self.tuning.actor_size;
        let origin = Vec2::new(self.tuning.actor_x + size / 2.0, self.actor.y + size / 1.5);
        self.particles.spawn_burst(origin, &self.tuning, &mut self.rng);
    }

    pub fn score(&self) -> u32 {
        self.scores.score
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_ms > 0.0
    }

    /// Everything a renderer needs for one frame
    pub fn snapshot(&self, shake_enabled: bool) -> RenderSnapshot {
        RenderSnapshot {
            status: self.status,
            score: self.scores.score,
            best_score: self.scores.best,
            actor: self.actor,
            actor_x: self.tuning.actor_x,
            actor_size: self.tuning.actor_size,
            obstacle_width: self.tuning.obstacle_width,
            obstacles: self.obstacles.iter().cloned().collect(),
            particles: self.particles.iter().cloned().collect(),
            playfield: self.playfield,
            ground_height: self.tuning.ground_height,
            shaking: shake_enabled && self.is_shaking(),
        }
    }
}

/// Read-only view of the state after a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub status: SessionStatus,
    pub score: u32,
    pub best_score: u32,
    pub actor: Actor,
    pub actor_x: f32,
    pub actor_size: f32,
    pub obstacle_width: f32,
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub playfield: Playfield,
    pub ground_height: f32,
    pub shaking: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_welcome() {
        let state = GameState::new(1, Tuning::default(), Playfield::new(400.0, 800.0), 9);
        assert_eq!(state.status, SessionStatus::Welcome);
        assert_eq!(state.best_score(), 9);
        assert_eq!(state.score(), 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_reset_session() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, tuning.clone(), Playfield::new(400.0, 800.0), 0);
        state.scores.on_pass();
        state.spawn_trail();
        state.actor.y = 10.0;

        state.reset_session();
        assert_eq!(state.status, SessionStatus::Playing);
        assert_eq!(state.score(), 0);
        assert!(state.particles.is_empty());
        assert_eq!(state.actor.y, 310.0);
        assert_eq!(state.actor.vel, tuning.jump_strength);
        assert_eq!(state.actor.rotation, tuning.start_rotation);
        assert_eq!(state.obstacles.spawn_timer_ms(), tuning.spawn_timer_prime_ms);
        assert_eq!(state.sequence, SequenceState::default());
    }

    #[test]
    fn test_playfield_width_cap() {
        let playfield = Playfield::from_window(1920.0, 1080.0, 448.0);
        assert_eq!(playfield, Playfield::new(448.0, 1080.0));
        let narrow = Playfield::from_window(360.0, 640.0, 448.0);
        assert_eq!(narrow.width, 360.0);
    }

    #[test]
    fn test_playfield_validity() {
        assert!(Playfield::new(1.0, 1.0).is_valid());
        assert!(!Playfield::new(0.0, 800.0).is_valid());
        assert!(!Playfield::new(400.0, -1.0).is_valid());
        assert!(!Playfield::new(f32::NAN, 800.0).is_valid());
    }
}
