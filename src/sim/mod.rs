//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame deltas are passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (append order, back-to-front removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_overlap};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, SpawnTimer};
pub use tick::{TickInput, tick};
