//! End-to-end frame scenarios driven with exact deltas

use penguin_run::consts::{BEST_SCORE_KEY, GROUND_Y};
use penguin_run::persistence::{KeyValueStore, MemoryStore, StoreError};
use penguin_run::platform::{Command, FrameClock, input};
use penguin_run::sim::{GameEvent, GameState, Obstacle, ObstacleKind, TickInput, tick};
use penguin_run::{BestScore, Tuning};

const FRAME_MS: f32 = 16.0;

/// Fresh run that never spawns on its own
fn quiet_state(best: u64) -> GameState {
    let mut state = GameState::new(1, Tuning::default(), best);
    state.spawn.threshold = f32::MAX;
    state
}

/// Memory store that counts writes
#[derive(Debug, Clone, Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: usize,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        self.inner.set(key, value)
    }
}

fn jump() -> TickInput {
    TickInput {
        jump: true,
        ..Default::default()
    }
}

#[test]
fn test_passing_one_obstacle_scores_exactly_once() {
    let mut state = quiet_state(0);
    assert_eq!(state.score, 0);
    assert_eq!(state.player.pos.x, 90.0);

    // Get airborne so the obstacle can pass underneath
    tick(&mut state, &jump(), FRAME_MS);
    for _ in 0..3 {
        tick(&mut state, &TickInput::default(), FRAME_MS);
    }
    assert!(state.player.pos.y < GROUND_Y - 34.0);

    state
        .obstacles
        .push(Obstacle::new(ObstacleKind::Ground, 100.0, GROUND_Y - 34.0, 30.0, 34.0));

    let mut frames = 0;
    while state.obstacles[0].right() >= 90.0 {
        assert_eq!(state.score, 0);
        tick(&mut state, &TickInput::default(), FRAME_MS);
        frames += 1;
        assert!(frames < 20);
    }
    assert!(state.is_running());
    assert_eq!(state.score, 1);
    assert!(state.obstacles[0].scored);

    // Further frames never count it again
    for _ in 0..10 {
        tick(&mut state, &TickInput::default(), FRAME_MS);
    }
    assert_eq!(state.score, 1);
}

#[test]
fn test_jump_arc_returns_to_ground() {
    let tuning = Tuning::default();
    let mut state = quiet_state(0);
    assert!(state.player.on_ground);

    // The jump itself, before any integration
    assert!(state.player.jump(tuning.jump_velocity));
    assert_eq!(state.player.vy, tuning.jump_velocity);
    assert!(!state.player.on_ground);

    // Airborne jump is rejected and leaves vy alone
    assert!(!state.player.jump(tuning.jump_velocity));
    assert_eq!(state.player.vy, tuning.jump_velocity);

    let mut peak = GROUND_Y;
    let mut frames = 0;
    loop {
        tick(&mut state, &jump(), FRAME_MS);
        frames += 1;
        peak = peak.min(state.player.pos.y);
        if state.player.on_ground {
            break;
        }
        assert!(frames < 60, "still airborne after {} frames", frames);
    }
    assert_eq!(state.player.pos.y, GROUND_Y);
    assert_eq!(state.player.vy, 0.0);
    assert!(GROUND_Y - peak > 100.0, "peak only {}", GROUND_Y - peak);
}

#[test]
fn test_overlap_ends_run_and_updates_best() {
    let mut state = quiet_state(7);
    state.score = 3;
    state
        .obstacles
        .push(Obstacle::new(ObstacleKind::Ground, 95.0, GROUND_Y - 40.0, 30.0, 40.0));
    tick(&mut state, &TickInput::default(), FRAME_MS);

    assert!(state.is_game_over());
    assert!(!state.is_running());
    assert_eq!(state.best, 7);
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::GameOver {
            score: 3,
            best: 7,
            new_best: false
        }]
    );

    // Nothing moves afterwards
    let x = state.obstacles[0].pos.x;
    tick(&mut state, &TickInput::default(), FRAME_MS);
    assert_eq!(state.obstacles[0].pos.x, x);
}

#[test]
fn test_touching_obstacle_does_not_end_run() {
    let mut state = quiet_state(0);
    // Standing hitbox top is at GROUND_Y - 48; this bottom edge sits exactly on it
    let top = GROUND_Y - 48.0 - 32.0;
    state
        .obstacles
        .push(Obstacle::new(ObstacleKind::Overhead, 90.0, top, 60.0, 32.0));
    for _ in 0..5 {
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.player.hitbox(&state.tuning).top(), state.obstacles[0].rect().bottom());
    }
    assert!(state.is_running());
}

#[test]
fn test_best_score_is_max_over_runs() {
    let mut best = BestScore::load(CountingStore::default());
    let mut state = quiet_state(best.get());

    for score in [5u64, 2, 9, 9, 3, 0] {
        state.score = score;
        state.end_run();
        for event in state.drain_events() {
            if let GameEvent::GameOver { score, .. } = event {
                best.record(score);
            }
        }
        assert_eq!(state.best, best.get());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME_MS);
        assert!(state.is_running());
    }

    assert_eq!(best.get(), 9);
    assert_eq!(state.best, 9);
    assert_eq!(best.store().writes, 2);
    assert_eq!(best.store().get(BEST_SCORE_KEY), Ok(Some("9".to_string())));

    // A new session reads the persisted value back
    let store = best.store().clone();
    assert_eq!(BestScore::load(store).get(), 9);
}

#[test]
fn test_clock_driven_frames_cap_large_stalls() {
    let mut clock = FrameClock::default();
    let mut state = quiet_state(0);
    clock.restart(0.0);

    for now in [16.0, 33.0, 5000.0, 5016.0] {
        let dt = clock.delta(now);
        tick(&mut state, &TickInput::default(), dt);
    }
    // 16 + 17 + 32 (capped) + 16
    assert_eq!(state.time_ms, 81.0);
}

#[test]
fn test_pause_freezes_obstacles() {
    let mut state = quiet_state(0);
    state
        .obstacles
        .push(Obstacle::new(ObstacleKind::Overhead, 600.0, 170.0, 70.0, 32.0));
    let pause = TickInput {
        pause: true,
        ..Default::default()
    };
    tick(&mut state, &pause, FRAME_MS);
    let x = state.obstacles[0].pos.x;
    for _ in 0..5 {
        tick(&mut state, &TickInput::default(), FRAME_MS);
    }
    assert_eq!(state.obstacles[0].pos.x, x);

    tick(&mut state, &pause, FRAME_MS);
    assert!(state.obstacles[0].pos.x < x);
}

#[test]
fn test_jump_pressed_while_paused_fires_on_resume() {
    let mut state = quiet_state(0);
    let mut pending = TickInput::default();

    Command::TogglePause.apply(&mut pending);
    tick(&mut state, &pending, FRAME_MS);
    input::end_frame(&mut pending, state.is_paused());
    assert!(state.is_paused());

    Command::Jump.apply(&mut pending);
    for _ in 0..3 {
        tick(&mut state, &pending, FRAME_MS);
        input::end_frame(&mut pending, state.is_paused());
        assert!(state.player.on_ground);
    }

    Command::TogglePause.apply(&mut pending);
    tick(&mut state, &pending, FRAME_MS);
    input::end_frame(&mut pending, state.is_paused());
    assert!(state.is_running());
    assert!(!state.player.on_ground);
    assert!(!pending.jump);
    assert!(state.drain_events().contains(&GameEvent::Jumped));
}
