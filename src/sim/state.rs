//! Game state and core simulation types
//!
//! Everything a frame needs lives in [`GameState`]; no module-level globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::{Range, Tuning};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Update is skipped, drawing continues
    Paused,
    /// Run ended by a collision; waits for a restart
    GameOver,
}

/// Things that happened during a tick, drained by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// An obstacle was passed; carries the new score
    Scored { score: u64 },
    GameOver { score: u64, best: u64, new_best: bool },
    Paused,
    Resumed,
    Restarted,
}

/// The penguin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// x is fixed; y is the feet (bottom of the body)
    pub pos: Vec2,
    /// Vertical velocity, px per frame (negative = up)
    pub vy: f32,
    /// Current (animated) body height
    pub height: f32,
    pub on_ground: bool,
    pub ducking: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, GROUND_Y),
            vy: 0.0,
            height: tuning.standing_height,
            on_ground: true,
            ducking: false,
        }
    }

    /// Start a jump. Only honored on the ground and while not ducking.
    pub fn jump(&mut self, jump_velocity: f32) -> bool {
        if !self.on_ground || self.ducking {
            return false;
        }
        self.vy = jump_velocity;
        self.on_ground = false;
        true
    }

    /// Semi-implicit Euler step, then landing check
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) {
        self.vy += gravity;
        self.pos.y += self.vy;
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vy = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }

    /// Ease the body height toward the standing or ducking target
    pub fn ease_height(&mut self, tuning: &Tuning) {
        let target = if self.ducking {
            tuning.ducking_height
        } else {
            tuning.standing_height
        };
        self.height += (target - self.height) * tuning.duck_smoothing;
        self.height = self.height.max(0.0);
    }

    /// Collision rectangle: fixed width, current height, bottom at the feet.
    ///
    /// The drawn body is narrower than this; the hitbox keeps the fixed width.
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.pos.x - tuning.player_hitbox_offset,
            self.pos.y - self.height,
            tuning.player_hitbox_width,
            self.height,
        )
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Stands on the ground; jump over it
    Ground,
    /// Floats at head height; duck under it
    Overhead,
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Assigned at spawn; hand-built obstacles keep 0
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    /// Set once the trailing edge has passed the player
    pub scored: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            id: 0,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            kind,
            scored: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Trailing edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Roll a random obstacle just beyond the right edge of the surface
    pub fn roll<R: Rng>(rng: &mut R, tuning: &Tuning) -> Self {
        let x = SURFACE_WIDTH + tuning.spawn_offset;
        if rng.random_bool(tuning.ground_chance) {
            let h = sample(rng, tuning.ground_height);
            let w = sample(rng, tuning.ground_width);
            Self::new(ObstacleKind::Ground, x, GROUND_Y - h, w, h)
        } else {
            let h = tuning.overhead_height;
            let y = GROUND_Y - tuning.overhead_clearance - sample(rng, tuning.overhead_lift);
            let w = sample(rng, tuning.overhead_width);
            Self::new(ObstacleKind::Overhead, x, y, w, h)
        }
    }
}

/// Uniform sample from an inclusive range
pub fn sample<R: Rng>(rng: &mut R, range: Range) -> f32 {
    rng.random_range(range.min..=range.max)
}

/// Countdown to the next obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// ms accumulated since the last spawn
    pub elapsed: f32,
    /// ms at which the next spawn fires
    pub threshold: f32,
}

impl SpawnTimer {
    pub fn new(threshold: f32) -> Self {
        Self {
            elapsed: 0.0,
            threshold,
        }
    }

    /// Accumulate `dt`; returns true when the threshold is reached
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.threshold
    }

    /// Restart the countdown with a new threshold
    pub fn rearm(&mut self, threshold: f32) {
        self.elapsed = 0.0;
        self.threshold = threshold;
    }
}

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    rng: Pcg32,
    /// Simulated play time, ms
    pub time_ms: f32,
    /// Updates since the last reset
    pub frames: u64,
    pub score: u64,
    /// Best score across all runs (loaded from storage by the caller)
    pub best: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Append order; back-to-front removal
    pub obstacles: Vec<Obstacle>,
    pub spawn: SpawnTimer,
    /// Pending events since the last drain
    events: Vec<GameEvent>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run
    pub fn new(seed: u64, tuning: Tuning, best: u64) -> Self {
        let mut state = Self {
            seed,
            player: Player::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            time_ms: 0.0,
            frames: 0,
            score: 0,
            best,
            phase: GamePhase::Running,
            obstacles: Vec::new(),
            spawn: SpawnTimer::new(0.0),
            events: Vec::new(),
            next_id: 1,
        };
        state.reset();
        state
    }

    /// Default tuning, no previous best
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tuning::default(), 0)
    }

    /// Reinitialize all run state. Keeps `best` and the RNG stream.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.player = Player::new(&self.tuning);
        self.time_ms = 0.0;
        self.frames = 0;
        self.score = 0;
        let threshold = sample(&mut self.rng, self.tuning.spawn_interval);
        self.spawn = SpawnTimer::new(threshold);
        self.phase = GamePhase::Running;
    }

    /// Update runs this frame (not paused, not over)
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current scroll speed, px per frame
    pub fn speed(&self) -> f32 {
        self.tuning.speed_at(self.time_ms)
    }

    /// Draw the threshold for every spawn after the first
    pub(crate) fn roll_respawn_threshold(&mut self) -> f32 {
        sample(&mut self.rng, self.tuning.respawn_interval())
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append exactly one random obstacle
    pub fn spawn_obstacle(&mut self) {
        let mut obstacle = Obstacle::roll(&mut self.rng, &self.tuning);
        obstacle.id = self.next_entity_id();
        log::debug!(
            "Spawned {:?} obstacle #{} {}x{} at t={:.0}ms",
            obstacle.kind,
            obstacle.id,
            obstacle.size.x as u32,
            obstacle.size.y as u32,
            self.time_ms
        );
        self.obstacles.push(obstacle);
    }

    /// End the run and fold the score into the best
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        let new_best = self.score > self.best;
        self.best = self.best.max(self.score);
        self.push_event(GameEvent::GameOver {
            score: self.score,
            best: self.best,
            new_best,
        });
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
