//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the
//! classic feel; a JSON object stored under [`TUNING_KEY`] can override any
//! subset of fields.
//!
//! [`TUNING_KEY`]: crate::consts::TUNING_KEY

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating tuning overrides
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Inclusive `[min, max]` range a random value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Same range with both ends multiplied by `factor`
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Gameplay constants
///
/// Physics values are per frame; spawn intervals and the speed ramp are in
/// milliseconds of simulated time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Fixed horizontal position of the penguin
    pub player_x: f32,
    /// Collision rectangle width
    pub player_hitbox_width: f32,
    /// Collision rectangle offset left of `player_x`
    pub player_hitbox_offset: f32,
    pub standing_height: f32,
    pub ducking_height: f32,
    /// Fraction of the remaining height gap closed each frame
    pub duck_smoothing: f32,

    // === Physics ===
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_velocity: f32,

    // === Scrolling ===
    /// Obstacle speed at t = 0, px per frame
    pub base_speed: f32,
    /// Speed gained per ms of play
    pub speed_ramp: f32,

    // === Spawning ===
    /// Interval before the first obstacle of a run, ms
    pub spawn_interval: Range,
    /// Multiplier applied to `spawn_interval` for every later spawn
    pub respawn_factor: f32,
    /// Probability that a spawn is ground-standing (rest are overhead)
    pub ground_chance: f64,
    pub ground_width: Range,
    pub ground_height: Range,
    pub overhead_width: Range,
    pub overhead_height: f32,
    /// Gap between the ground line and the bottom of an overhead obstacle
    pub overhead_clearance: f32,
    /// Extra random lift applied to overhead obstacles
    pub overhead_lift: Range,
    /// Spawn position right of the visible edge
    pub spawn_offset: f32,
    /// Obstacles are dropped once their right edge is left of this
    pub despawn_margin: f32,

    // === Background ===
    pub cloud_count: u32,
    pub cloud_spacing: f32,
    /// Cloud drift, px per ms of play
    pub cloud_drift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_x: 90.0,
            player_hitbox_width: 36.0,
            player_hitbox_offset: 10.0,
            standing_height: 48.0,
            ducking_height: 30.0,
            duck_smoothing: 0.3,

            gravity: 0.8,
            jump_velocity: -14.0,

            base_speed: 6.0,
            speed_ramp: 0.0004,

            spawn_interval: Range::new(900.0, 1600.0),
            respawn_factor: 0.9,
            ground_chance: 0.6,
            ground_width: Range::new(28.0, 44.0),
            ground_height: Range::new(34.0, 60.0),
            overhead_width: Range::new(60.0, 90.0),
            overhead_height: 32.0,
            overhead_clearance: 70.0,
            overhead_lift: Range::new(0.0, 14.0),
            spawn_offset: 10.0,
            despawn_margin: -50.0,

            cloud_count: 6,
            cloud_spacing: 170.0,
            cloud_drift: 0.03,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Scroll speed after `elapsed_ms` of play
    pub fn speed_at(&self, elapsed_ms: f32) -> f32 {
        self.base_speed + elapsed_ms * self.speed_ramp
    }

    /// Range used for every spawn after the first
    pub fn respawn_interval(&self) -> Range {
        self.spawn_interval.scaled(self.respawn_factor)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let ranges = [
            self.spawn_interval,
            self.ground_width,
            self.ground_height,
            self.overhead_width,
            self.overhead_lift,
        ];
        if ranges.iter().any(|r| !r.is_valid()) {
            return Err(TuningError::Invalid("range min must not exceed max"));
        }
        let scalars = [
            self.player_x,
            self.player_hitbox_width,
            self.player_hitbox_offset,
            self.standing_height,
            self.ducking_height,
            self.duck_smoothing,
            self.gravity,
            self.jump_velocity,
            self.base_speed,
            self.speed_ramp,
            self.respawn_factor,
            self.overhead_height,
            self.overhead_clearance,
            self.spawn_offset,
            self.despawn_margin,
            self.cloud_spacing,
            self.cloud_drift,
        ];
        if scalars.iter().any(|v| !v.is_finite()) || !self.ground_chance.is_finite() {
            return Err(TuningError::Invalid("values must be finite"));
        }
        if self.spawn_interval.min <= 0.0 || self.respawn_factor <= 0.0 {
            return Err(TuningError::Invalid("spawn interval must be positive"));
        }
        // Later spawns draw from the scaled range, which can overflow on its own
        if !self.respawn_interval().is_valid() {
            return Err(TuningError::Invalid("respawn interval out of range"));
        }
        if self.ground_width.min <= 0.0
            || self.ground_height.min <= 0.0
            || self.overhead_width.min <= 0.0
            || self.overhead_height <= 0.0
        {
            return Err(TuningError::Invalid("obstacle sizes must be positive"));
        }
        if self.standing_height <= 0.0 || self.ducking_height <= 0.0 {
            return Err(TuningError::Invalid("player heights must be positive"));
        }
        if !(0.0..=1.0).contains(&self.duck_smoothing) {
            return Err(TuningError::Invalid("duck smoothing must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.ground_chance) {
            return Err(TuningError::Invalid("ground chance must be in [0, 1]"));
        }
        if self.base_speed <= 0.0 || self.speed_ramp < 0.0 {
            return Err(TuningError::Invalid("scroll speed must be positive and non-decreasing"));
        }
        Ok(())
    }

    /// Load overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use crate::persistence::KeyValueStore;
        use crate::platform::storage::LocalStore;

        let json = LocalStore::open().and_then(|store| store.get(crate::consts::TUNING_KEY));
        match json {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning overrides: {}", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Tuning overrides unavailable: {}", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
