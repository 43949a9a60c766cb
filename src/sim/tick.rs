//! Per-frame simulation tick
//!
//! Core game loop that advances the run by one display frame. Physics is
//! integrated per frame; timers and the speed ramp use the frame delta in ms.

use super::collision::first_overlap;
use super::state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind};
use crate::consts::GROUND_Y;

/// Frames of lead the autopilot gives itself before a ground obstacle
const AUTOPILOT_JUMP_LEAD: f32 = 7.0;
/// Frames of lead the autopilot gives itself before an overhead obstacle
const AUTOPILOT_DUCK_LEAD: f32 = 6.0;

/// Input intents for a single frame
///
/// One-shot flags (`jump`, `pause`, `restart`, `acknowledge`) are cleared by
/// the caller after every frame; `duck` and `autopilot` are held.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump request (ArrowUp/Space, right-half pointer press)
    pub jump: bool,
    /// Duck held (ArrowDown, left-half pointer press)
    pub duck: bool,
    /// Pause toggle
    pub pause: bool,
    /// Explicit restart (button), honored in any phase
    pub restart: bool,
    /// Acknowledge key (Enter), restarts only after game over
    pub acknowledge: bool,
    /// Demo mode - the autopilot plays the game
    pub autopilot: bool,
}

/// Advance the game by one frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if input.restart || (input.acknowledge && state.is_game_over()) {
        state.reset();
        state.push_event(GameEvent::Restarted);
        log::info!("Run restarted (best {})", state.best);
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                state.push_event(GameEvent::Resumed);
            }
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    if !state.is_running() {
        return;
    }

    let mut input = input.clone();
    if input.autopilot {
        autopilot(state, &mut input);
    }

    state.player.ducking = input.duck;
    if input.jump && state.player.jump(state.tuning.jump_velocity) {
        state.push_event(GameEvent::Jumped);
    }

    update(state, dt_ms);
}

/// Simulation step proper: time, physics, spawning, movement, scoring, collision
fn update(state: &mut GameState, dt_ms: f32) {
    state.time_ms += dt_ms;
    state.frames += 1;
    let speed = state.speed();

    let tuning = &state.tuning;
    state.player.integrate(tuning.gravity, GROUND_Y);
    state.player.ease_height(tuning);

    // Spawn obstacles
    if state.spawn.advance(dt_ms) {
        let threshold = state.roll_respawn_threshold();
        state.spawn.rearm(threshold);
        state.spawn_obstacle();
    }

    // Move, cull and score, back to front so removal never skips an entry
    let player_x = state.player.pos.x;
    let despawn_margin = state.tuning.despawn_margin;
    for i in (0..state.obstacles.len()).rev() {
        let obstacle = &mut state.obstacles[i];
        obstacle.pos.x -= speed;
        if obstacle.right() < despawn_margin {
            state.obstacles.remove(i);
            continue;
        }
        if !obstacle.scored && obstacle.right() < player_x {
            obstacle.scored = true;
            state.score += 1;
            let score = state.score;
            state.push_event(GameEvent::Scored { score });
        }
    }

    let hitbox = state.player.hitbox(&state.tuning);
    if let Some(i) = first_overlap(&hitbox, state.obstacles.iter().map(Obstacle::rect)) {
        log::info!(
            "Hit {:?} obstacle at x={:.0} after {:.1}s, score {}",
            state.obstacles[i].kind,
            state.obstacles[i].pos.x,
            state.time_ms / 1000.0,
            state.score
        );
        state.end_run();
    }
}

/// Pick jump/duck intents from the nearest obstacle still ahead
fn autopilot(state: &GameState, input: &mut TickInput) {
    let hitbox = state.player.hitbox(&state.tuning);
    let speed = state.speed();

    let next = state
        .obstacles
        .iter()
        .filter(|o| o.right() > hitbox.left())
        .min_by(|a, b| {
            a.pos
                .x
                .partial_cmp(&b.pos.x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    input.jump = false;
    input.duck = false;
    let Some(next) = next else {
        return;
    };

    let gap = next.pos.x - hitbox.right();
    match next.kind {
        ObstacleKind::Ground => {
            input.jump = gap <= speed * AUTOPILOT_JUMP_LEAD;
        }
        ObstacleKind::Overhead => {
            // Only bother if it would reach a standing penguin
            let standing_top = state.player.pos.y - state.tuning.standing_height;
            input.duck = gap <= speed * AUTOPILOT_DUCK_LEAD && next.rect().bottom() > standing_top;
        }
    }
}
