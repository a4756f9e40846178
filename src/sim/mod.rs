//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only through the capped, normalized [`FrameDelta`](crate::FrameDelta)
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacles;
pub mod particles;
pub mod score;
pub mod sequence;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{ObstacleCheck, Rect, actor_hitbox, check_obstacles, hits_ground};
pub use obstacles::{Obstacle, ObstacleField};
pub use particles::{Particle, ParticleSystem};
pub use score::ScoreTracker;
pub use sequence::{Mode, Placement, SequenceState};
pub use state::{GameEvent, GameState, Playfield, RenderSnapshot, SessionStatus};
pub use tick::{TickInput, tick};
