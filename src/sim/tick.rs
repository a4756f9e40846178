//! Per-frame simulation step
//!
//! Drives the session state machine and, while playing, advances every
//! component in a fixed order:
//! actor → particles → ground check → obstacle spawn/advance →
//! obstacle collision and scoring → cleanup.

use super::actor::Actor;
use super::collision::{check_obstacles, hits_ground, snap_to_ground};
use super::state::{GameEvent, GameState, Playfield, SessionStatus};
use crate::clock::FrameDelta;

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Jump / start (key, tap or click)
    pub jump: bool,
    /// Stop play and go back to Ready
    pub pause: bool,
    /// New playfield from the viewport
    pub playfield: Option<Playfield>,
}

/// Advance the game state by one frame and report what happened
pub fn tick(state: &mut GameState, input: &TickInput, delta: FrameDelta) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(playfield) = input.playfield {
        resize(state, playfield);
    }

    // Shake runs on real time in every state
    state.shake_ms = (state.shake_ms - delta.elapsed_ms).max(0.0);

    if input.pause && state.status == SessionStatus::Playing {
        state.status = SessionStatus::Ready;
        log::info!("Paused at score {}", state.score());
        events.push(GameEvent::Paused);
        return events;
    }

    if input.jump {
        match state.status {
            SessionStatus::Welcome => {
                state.status = SessionStatus::Ready;
                events.push(GameEvent::Ready);
                return events;
            }
            SessionStatus::Ready | SessionStatus::GameOver => {
                if !state.playfield.is_valid() {
                    warn_degenerate(state);
                    return events;
                }
                start_session(state, &mut events);
                // First physics step happens on the next frame
                return events;
            }
            SessionStatus::Playing => {
                state.actor.jump(state.tuning.jump_strength);
                state.spawn_trail();
                events.push(GameEvent::Jumped);
            }
        }
    }

    if state.status != SessionStatus::Playing {
        return events;
    }

    if !state.playfield.is_valid() {
        warn_degenerate(state);
        return events;
    }
    state.playfield_degenerate = false;

    let dt = delta.factor;

    // 1. Actor
    state.actor.step(&state.tuning, dt);

    // 2. Particles
    state.particles.advance(&state.tuning, dt);

    // 3. Ground
    if hits_ground(&state.actor, &state.playfield, &state.tuning) {
        snap_to_ground(&mut state.actor, &state.playfield, &state.tuning);
        game_over(state, &mut events);
        return events;
    }

    // 4. Obstacles
    if let Some(id) = state.obstacles.try_spawn(
        delta.elapsed_ms,
        &state.playfield,
        &mut state.sequence,
        &state.tuning,
        &mut state.rng,
    ) {
        log::trace!("Spawned obstacle {} in {:?} run", id, state.sequence.mode);
    }
    state.obstacles.advance(&state.tuning, dt);

    // 5. Collisions and scoring
    let check = check_obstacles(&state.actor, &mut state.obstacles, &state.tuning);
    for _ in 0..check.passed {
        let score = state.scores.on_pass();
        events.push(GameEvent::Scored { score });
    }
    if check.collided {
        game_over(state, &mut events);
        return events;
    }

    // 6. Cleanup
    state.obstacles.prune(&state.tuning);

    events
}

fn resize(state: &mut GameState, playfield: Playfield) {
    if playfield == state.playfield {
        return;
    }
    state.playfield = playfield;
    // Keep the idle actor centred on the menus
    if matches!(state.status, SessionStatus::Welcome | SessionStatus::Ready) && playfield.is_valid() {
        state.actor.y = Actor::centered_y(&playfield, &state.tuning);
    }
}

fn warn_degenerate(state: &mut GameState) {
    if !state.playfield_degenerate {
        log::warn!(
            "Playfield {}x{} is unusable; simulation paused",
            state.playfield.width,
            state.playfield.height
        );
        state.playfield_degenerate = true;
    }
}

fn start_session(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.reset_session();
    state.spawn_trail();
    log::info!(
        "Session started (seed {}, playfield {}x{}, best {})",
        state.seed,
        state.playfield.width,
        state.playfield.height,
        state.best_score()
    );
    events.push(GameEvent::SessionStarted);
    events.push(GameEvent::Jumped);
}

fn game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.status = SessionStatus::GameOver;
    state.shake_ms = state.tuning.shake_duration_ms;

    let new_best = state.scores.on_session_end();
    let score = state.score();
    let best = state.best_score();
    if new_best {
        log::info!("New best score: {}", best);
    }
    log::info!("Game over at score {} (best {})", score, best);

    events.push(GameEvent::GameOver {
        score,
        best,
        new_best,
    });
}
