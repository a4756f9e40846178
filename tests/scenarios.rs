//! End-to-end sessions through the public API

use std::collections::HashSet;

use flap_run::clock::FrameDelta;
use flap_run::highscores::MemoryStore;
use flap_run::sim::{GameState, Playfield, SessionStatus, TickInput, tick};
use flap_run::{Game, GameHooks, Settings, Tuning};

const PLAYFIELD: Playfield = Playfield::new(448.0, 800.0);

#[derive(Debug, Default)]
struct Recorder {
    jumps: u32,
    scores: Vec<u32>,
    game_overs: Vec<(u32, bool)>,
}

impl GameHooks for Recorder {
    fn on_jump(&mut self) {
        self.jumps += 1;
    }

    fn on_score(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn on_game_over(&mut self, score: u32, new_best: bool) {
        self.game_overs.push((score, new_best));
    }
}

fn jump() -> TickInput {
    TickInput {
        jump: true,
        ..Default::default()
    }
}

/// Obstacles that can only be passed: the gap covers everything below the
/// minimum upper barrier height.
fn open_tuning() -> Tuning {
    Tuning {
        base_gap: 2000.0,
        ..Tuning::default()
    }
}

struct Driver {
    game: Game<Recorder, MemoryStore>,
    now: f64,
}

impl Driver {
    fn new(tuning: Tuning, store: MemoryStore) -> Self {
        let mut driver = Self {
            game: Game::new(
                99,
                tuning,
                PLAYFIELD,
                Settings::default(),
                Recorder::default(),
                store,
            ),
            now: 0.0,
        };
        driver.step();
        driver
    }

    fn step(&mut self) {
        self.now += 1000.0 / 60.0;
        self.game.frame(self.now);
    }

    fn start(&mut self) {
        while self.game.state().status != SessionStatus::Playing {
            self.game.jump();
            self.step();
        }
    }

    /// Hover mid-screen until the score reaches `target`
    fn play_to(&mut self, target: u32) {
        for _ in 0..10_000 {
            let state = self.game.state();
            if state.score() >= target {
                return;
            }
            assert_eq!(state.status, SessionStatus::Playing);
            if state.actor.vel >= 0.0 && state.actor.y > 300.0 {
                self.game.jump();
            }
            self.step();
        }
        panic!("never reached score {}", target);
    }

    /// Stop flapping and fall
    fn die(&mut self) {
        for _ in 0..10_000 {
            if self.game.state().status == SessionStatus::GameOver {
                return;
            }
            self.step();
        }
        panic!("never hit the ground");
    }
}

#[test]
fn first_obstacle_arrives_on_interval_and_scrolls() {
    let tuning = Tuning {
        ideal_frame_ms: 20.0,
        spawn_timer_prime_ms: 0.0,
        ..Tuning::default()
    };
    let mut state = GameState::new(2024, tuning, PLAYFIELD, 0);
    let delta = FrameDelta::from_elapsed(20.0, &state.tuning);
    assert_eq!(delta.factor, 1.0);

    tick(&mut state, &jump(), delta);
    tick(&mut state, &jump(), delta);
    assert_eq!(state.status, SessionStatus::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.best_score(), 0);

    let spawn_frame = 75; // 75 * 20ms = 1500ms
    for frame in 1..=200u32 {
        let input = if frame % 20 == 0 && state.status == SessionStatus::Playing {
            jump()
        } else {
            TickInput::default()
        };
        tick(&mut state, &input, delta);

        if frame < spawn_frame {
            assert!(state.obstacles.is_empty(), "early spawn at frame {}", frame);
        }
        if frame == spawn_frame {
            assert_eq!(state.obstacles.len(), 1);
        }
        if frame == 100 {
            // 2000ms: scrolled once per tick since (and including) the spawn frame
            assert_eq!(state.status, SessionStatus::Playing);
            assert_eq!(state.obstacles.len(), 1);
            let ticks = (frame - spawn_frame + 1) as f32;
            let expected = PLAYFIELD.width - state.tuning.scroll_speed * ticks;
            let x = state.obstacles.front().unwrap().x;
            assert!((x - expected).abs() < 1e-3, "x = {}, expected {}", x, expected);
        }
    }

    // The column cannot get behind the actor within 200 frames
    assert_eq!(state.score(), 0);
}

#[test]
fn best_score_only_persists_when_beaten() {
    let mut driver = Driver::new(open_tuning(), MemoryStore::with_best(5));
    assert_eq!(driver.game.state().best_score(), 5);

    driver.start();
    assert_eq!(driver.game.state().score(), 0);
    driver.play_to(3);
    driver.die();

    assert_eq!(driver.game.state().score(), 3);
    assert_eq!(driver.game.state().best_score(), 5);
    assert!(driver.game.store().writes.is_empty());
    assert_eq!(driver.game.hooks().game_overs, vec![(3, false)]);

    driver.start();
    assert_eq!(driver.game.state().score(), 0);
    driver.play_to(7);
    driver.die();

    assert_eq!(driver.game.state().best_score(), 7);
    assert_eq!(driver.game.store().writes, vec![7]);
    assert_eq!(driver.game.hooks().game_overs, vec![(3, false), (7, true)]);
    assert!(driver.game.hooks().jumps > 2);
    assert_eq!(driver.game.hooks().scores, vec![1, 2, 3, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn each_obstacle_scores_once() {
    let tuning = open_tuning();
    let mut state = GameState::new(5, tuning, PLAYFIELD, 0);
    let delta = FrameDelta::ticks(1.0, &state.tuning);
    tick(&mut state, &jump(), delta);
    tick(&mut state, &jump(), delta);

    let mut passed: HashSet<u32> = HashSet::new();
    for _ in 0..3000 {
        let input = if state.actor.vel >= 0.0 && state.actor.y > 300.0 {
            jump()
        } else {
            TickInput::default()
        };
        let before = state.score();
        tick(&mut state, &input, delta);
        assert_eq!(state.status, SessionStatus::Playing);

        let mut newly = 0;
        for obstacle in state.obstacles.iter().filter(|o| o.passed) {
            if passed.insert(obstacle.id) {
                newly += 1;
            }
        }
        assert_eq!(state.score() - before, newly);
    }

    assert!(state.score() > 10);
    assert_eq!(state.score() as usize, passed.len());
}

#[test]
fn stalled_frame_is_capped() {
    let mut stalled = Driver::new(Tuning::default(), MemoryStore::default());
    let mut normal = Driver::new(Tuning::default(), MemoryStore::default());
    stalled.start();
    normal.start();

    stalled.now += 2000.0;
    stalled.game.frame(stalled.now);
    normal.now += 64.0;
    normal.game.frame(normal.now);

    assert_eq!(stalled.game.state().actor, normal.game.state().actor);
    assert_eq!(
        stalled.game.state().obstacles.spawn_timer_ms(),
        normal.game.state().obstacles.spawn_timer_ms()
    );
}
