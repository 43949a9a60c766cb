//! Penguin Run - a side-scrolling jump/duck runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `renderer`: Read-only scene drawing onto a 2D surface
//! - `platform`: Browser/native platform abstraction (time, input, storage)
//! - `persistence`: Key-value store abstraction
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical surface dimensions (all coordinates live in this space)
    pub const SURFACE_WIDTH: f32 = 960.0;
    pub const SURFACE_HEIGHT: f32 = 320.0;

    /// Distance from the bottom of the surface to the ground line
    pub const GROUND_MARGIN: f32 = 48.0;
    /// Ground line (player feet rest here)
    pub const GROUND_Y: f32 = SURFACE_HEIGHT - GROUND_MARGIN;

    /// Largest frame delta fed to the simulation, in ms.
    /// Keeps a stalled tab from producing one giant step.
    pub const MAX_FRAME_DT_MS: f32 = 32.0;

    /// LocalStorage key for the best score (plain integer string)
    pub const BEST_SCORE_KEY: &str = "penguin_best";
    /// LocalStorage key for optional tuning overrides (JSON)
    pub const TUNING_KEY: &str = "penguin_tuning";
}
