//! Flap Run - a side-scrolling flap-through-the-pipes reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `clock`: Frame-time capping and tick-factor normalization
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (mute, screen shake)
//! - `highscores`: Best-score persistence
//! - `audio`: Feedback hooks the simulation signals (flap, score, die)
//! - `game`: Frame driver tying the above together
//! - `config`: Environment configuration for the headless runner

pub mod audio;
pub mod clock;
pub mod config;
pub mod game;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, AudioSink, GameHooks, SoundEffect};
pub use clock::{FrameClock, FrameDelta};
pub use game::Game;
pub use highscores::{MemoryStore, ScoreStore, StoreError};
pub use settings::Settings;
pub use tuning::{ModeTable, RunLength, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Duration of one idealized 60 Hz frame; a tick factor of 1.0 equals this much time
    pub const IDEAL_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Real frame time is capped to this before normalization (stalled tab protection)
    pub const MAX_FRAME_MS: f32 = 64.0;

    /// Widest playable column, even on wider displays
    pub const MAX_GAME_WIDTH: f32 = 448.0;

    /// How long the game-over shake lasts
    pub const SHAKE_DURATION_MS: f32 = 400.0;

    /// Storage key for the persisted best score
    pub const BEST_SCORE_KEY: &str = "flappy-best-score";
}
