//! Flap Run entry point
//!
//! Native builds run a headless, seeded session with a simple autopilot and
//! print the final render snapshot as JSON. Browser hosts drive
//! [`flap_run::Game`] directly from their animation-frame callback.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use flap_run::audio::{AudioManager, LogSink};
    use flap_run::config::RunConfig;
    use flap_run::highscores::{FileStore, MemoryStore, ScoreStore};
    use flap_run::sim::{GameState, Playfield, SessionStatus};
    use flap_run::{Game, Settings, Tuning};

    pub fn run() {
        let config = RunConfig::from_env();
        log::info!("Flap Run (native) starting with {:?}", config);

        let tuning = match &config.tuning_path {
            Some(path) => match std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
            {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::warn!("Using default tuning ({}): {}", path.display(), e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        };

        let settings = config
            .settings_path
            .as_deref()
            .map(Settings::load_from)
            .unwrap_or_default();

        match &config.score_path {
            Some(path) => play(&config, tuning, settings, FileStore::new(path)),
            None => play(&config, tuning, settings, MemoryStore::default()),
        }
    }

    fn play<S: ScoreStore>(config: &RunConfig, tuning: Tuning, settings: Settings, store: S) {
        let frame_ms = f64::from(tuning.ideal_frame_ms);
        let playfield = Playfield::from_window(
            config.window_width,
            config.window_height,
            tuning.max_game_width,
        );
        let mut game = Game::new(
            config.seed,
            tuning,
            playfield,
            settings,
            AudioManager::new(LogSink),
            store,
        );

        let mut now = 0.0;
        let mut sessions = 0u32;
        for _ in 0..config.frames {
            match game.state().status {
                SessionStatus::Welcome | SessionStatus::Ready => game.jump(),
                SessionStatus::GameOver if !game.state().is_shaking() => {
                    sessions += 1;
                    game.jump();
                }
                SessionStatus::Playing if should_flap(game.state()) => game.jump(),
                _ => {}
            }
            now += frame_ms;
            game.frame(now);
        }
        game.stop();

        let snapshot = game.snapshot();
        log::info!(
            "Finished {} frames: {} completed sessions, score {}, best {}",
            config.frames,
            sessions,
            snapshot.score,
            snapshot.best_score
        );
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not encode snapshot: {}", e),
        }
    }

    /// Flap when falling below the centre of the next gap
    fn should_flap(state: &GameState) -> bool {
        let tuning = &state.tuning;
        let center_y = state.actor.y + tuning.actor_size / 2.0;
        let target = state
            .obstacles
            .iter()
            .find(|o| o.right(tuning.obstacle_width) > tuning.actor_x)
            .map(|o| o.top_height + o.gap * 0.6)
            .unwrap_or((state.playfield.height - tuning.ground_height) / 2.0);
        state.actor.vel >= 0.0 && center_y > target
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive flap_run::Game from requestAnimationFrame
}
