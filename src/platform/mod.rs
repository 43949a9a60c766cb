//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (injectable deltas)
//! - Input events mapped to simulation intents
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;
pub mod time;

pub use input::Command;
pub use time::FrameClock;
