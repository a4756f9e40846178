//! Frame driver
//!
//! Owns the simulation state and everything around it: the frame clock,
//! queued commands, the feedback hooks and the best-score store. Hosts call
//! [`Game::frame`] once per display refresh and render the returned snapshot.

use crate::audio::GameHooks;
use crate::clock::FrameClock;
use crate::highscores::{ScoreStore, load_best_or_zero};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Playfield, RenderSnapshot, TickInput, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game<H: GameHooks, S: ScoreStore> {
    state: GameState,
    clock: FrameClock,
    input: TickInput,
    settings: Settings,
    hooks: H,
    store: S,
    running: bool,
}

impl<H: GameHooks, S: ScoreStore> Game<H, S> {
    /// Build a game on the welcome screen; the best score is read once here
    pub fn new(
        seed: u64,
        tuning: Tuning,
        playfield: Playfield,
        settings: Settings,
        hooks: H,
        mut store: S,
    ) -> Self {
        let best = load_best_or_zero(&mut store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, tuning, playfield, best),
            clock: FrameClock::new(),
            input: TickInput::default(),
            settings,
            hooks,
            store,
            running: true,
        }
    }

    /// Queue a jump/start command for the next frame
    pub fn jump(&mut self) {
        self.input.jump = true;
    }

    /// Queue a pause for the next frame
    pub fn pause(&mut self) {
        self.input.pause = true;
    }

    /// Queue a viewport change; the width is capped to the game column
    pub fn resize(&mut self, window_width: f32, window_height: f32) {
        let max_width = self.state.tuning.max_game_width;
        self.input.playfield = Some(Playfield::from_window(window_width, window_height, max_width));
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.settings.toggle_mute()
    }

    /// Run one frame at timestamp `now_ms`.
    ///
    /// Returns `None` once the loop has been stopped.
    pub fn frame(&mut self, now_ms: f64) -> Option<RenderSnapshot> {
        if !self.running {
            return None;
        }

        let delta = self.clock.delta(now_ms, &self.state.tuning);
        let input = std::mem::take(&mut self.input);
        let events = tick(&mut self.state, &input, delta);
        for event in events {
            self.dispatch(event);
        }

        Some(self.snapshot())
    }

    /// Cancel the loop; later frames are no-ops
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Game loop stopped");
        }
        self.running = false;
        self.input = TickInput::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot(self.settings.effective_screen_shake())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&mut self, event: GameEvent) {
        let muted = self.settings.muted;
        match event {
            GameEvent::Jumped if !muted => self.hooks.on_jump(),
            GameEvent::Scored { score } if !muted => self.hooks.on_score(score),
            GameEvent::GameOver {
                score,
                best,
                new_best,
            } => {
                if !muted {
                    self.hooks.on_game_over(score, new_best);
                }
                if new_best {
                    // Fire-and-forget: a failed write must not stop the game
                    if let Err(e) = self.store.save_best(best) {
                        log::warn!("Could not save best score: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}
